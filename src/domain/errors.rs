// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Opaque cause carried by [`DomainError::Persistence`].
pub type StoreCause = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {message}")]
    Persistence {
        message: String,
        #[source]
        source: Option<StoreCause>,
    },
}

impl DomainError {
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
            source: None,
        }
    }

    pub fn persistence_with(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Persistence {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn persistence_keeps_underlying_cause() {
        let io = std::io::Error::other("connection reset");
        let err = DomainError::persistence_with("failed to soft delete comment", io);

        assert_eq!(
            err.to_string(),
            "persistence error: failed to soft delete comment"
        );
        let source = err.source().expect("source should be preserved");
        assert_eq!(source.to_string(), "connection reset");
    }
}
