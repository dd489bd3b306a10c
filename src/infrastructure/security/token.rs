// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::infrastructure::security::claims::parse_claims;
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
    builder_ext::AuthorizerExt,
};
use chrono::{DateTime, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

const ACCESS_TOKEN_CODE: &str = r#"
    user({uid}, {uname});
    issued_at({issued});
    expires_at({exp});
    check if time($now), $now >= {issued};
    check if time($now), $now <= {exp};
"#;

/// Issues and verifies Ed25519-signed biscuit bearer tokens.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }

    fn mint(&self, subject: &TokenSubject, issued_at: SystemTime) -> ApplicationResult<String> {
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;

        let mut params: HashMap<String, Term> = HashMap::new();
        params.insert("uid".to_string(), i64::from(subject.user_id).into());
        params.insert("uname".to_string(), subject.username.clone().into());
        params.insert("issued".to_string(), issued_at.into());
        params.insert("exp".to_string(), expires_at.into());

        let token = Biscuit::builder()
            .code_with_params(ACCESS_TOKEN_CODE, params, HashMap::new())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(self.root.as_ref())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        token
            .seal()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .to_base64()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = SystemTime::now();
        let issued_at = DateTime::<Utc>::from(now);
        let ttl = chrono::Duration::from_std(self.ttl)
            .map_err(|_| ApplicationError::infrastructure("token ttl out of range"))?;
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let token = self.mint(&subject, now)?;

        Ok(AuthTokenDto {
            token,
            issued_at,
            expires_at,
            expires_in: ttl.num_seconds(),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .allow_all()
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let view = biscuit
            .authorizer()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
        let (facts, _, _, _) = view.dump();

        parse_claims(facts)
    }
}
