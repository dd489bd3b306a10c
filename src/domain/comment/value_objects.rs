// src/domain/comment/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("comment id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContent(String);

impl CommentContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content is required".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CommentContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CommentContent> for String {
    fn from(value: CommentContent) -> Self {
        value.0
    }
}

/// Deletion state of a comment. The store keeps this as a nullable
/// `deleted_at` column; `Deleted` carries the time the marker was first set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentState {
    #[default]
    Live,
    Deleted {
        at: DateTime<Utc>,
    },
}

impl CommentState {
    pub fn from_deleted_at(deleted_at: Option<DateTime<Utc>>) -> Self {
        match deleted_at {
            Some(at) => Self::Deleted { at },
            None => Self::Live,
        }
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Live => None,
            Self::Deleted { at } => Some(*at),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }

    /// Marks the state as deleted. An existing marker keeps its original time.
    pub fn mark_deleted(self, at: DateTime<Utc>) -> Self {
        match self {
            Self::Live => Self::Deleted { at },
            deleted @ Self::Deleted { .. } => deleted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn content_rejects_blank_values() {
        assert!(matches!(
            CommentContent::new(""),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            CommentContent::new("   \n"),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(CommentContent::new("hi").unwrap().as_str(), "hi");
    }

    #[test]
    fn id_must_be_positive() {
        assert!(CommentId::new(0).is_err());
        assert!(CommentId::new(-3).is_err());
        assert_eq!(i64::from(CommentId::new(7).unwrap()), 7);
    }

    #[test]
    fn mark_deleted_keeps_first_timestamp() {
        let first = Utc::now();
        let later = first + Duration::minutes(5);

        let state = CommentState::Live.mark_deleted(first).mark_deleted(later);

        assert_eq!(state.deleted_at(), Some(first));
        assert!(!state.is_live());
    }

    #[test]
    fn state_round_trips_through_nullable_column() {
        let at = Utc::now();
        assert_eq!(CommentState::from_deleted_at(None), CommentState::Live);
        assert_eq!(
            CommentState::from_deleted_at(Some(at)).deleted_at(),
            Some(at)
        );
    }
}
