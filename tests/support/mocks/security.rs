// tests/support/mocks/security.rs
use async_trait::async_trait;
use blog_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use blog_core::domain::user::UserId;
use chrono::Duration;

const TOKEN_PREFIX: &str = "user-";

/// Authorization header value that authenticates as user `id`.
pub fn bearer(id: i64) -> String {
    format!("Bearer {TOKEN_PREFIX}{id}")
}

pub fn actor(id: i64) -> AuthenticatedUser {
    let now = super::time::fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        username: format!("user{id}"),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

/// Tokens have the form `user-<id>`; anything else is rejected.
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: format!("{TOKEN_PREFIX}{}", subject.user_id),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        token
            .strip_prefix(TOKEN_PREFIX)
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|id| *id > 0)
            .map(actor)
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))
    }
}

/// Stores passwords as `hashed:<password>` and compares verbatim.
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
