// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Builds the authenticated actor from the facts of a verified token.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let mut claims = Claims::default();
    for fact in facts {
        claims.apply(&fact.predicate);
    }
    claims.into_user()
}

#[derive(Default)]
struct Claims {
    user_id: Option<i64>,
    username: Option<String>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

impl Claims {
    fn apply(&mut self, predicate: &Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(name)]) => {
                self.user_id = Some(*id);
                self.username = Some(name.clone());
            }
            ("issued_at", [Term::Date(seconds)]) => {
                self.issued_at = Some(UNIX_EPOCH + Duration::from_secs(*seconds));
            }
            ("expires_at", [Term::Date(seconds)]) => {
                self.expires_at = Some(UNIX_EPOCH + Duration::from_secs(*seconds));
            }
            _ => {}
        }
    }

    fn into_user(self) -> ApplicationResult<AuthenticatedUser> {
        let user_id = self
            .user_id
            .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
        let username = self
            .username
            .ok_or_else(|| ApplicationError::unauthorized("missing username"))?;
        let issued_at = self
            .issued_at
            .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
        let expires_at = self
            .expires_at
            .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

        let id = UserId::new(user_id)
            .map_err(|_| ApplicationError::unauthorized("invalid user id"))?;

        Ok(AuthenticatedUser {
            id,
            username,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
        })
    }
}
