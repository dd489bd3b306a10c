use crate::domain::errors::DomainError;

const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_POST_AUTHOR: &str = "posts_author_id_fkey";
const CNT_COMMENT_POST: &str = "comments_post_id_fkey";
const CNT_COMMENT_PARENT: &str = "comments_parent_id_fkey";
const CNT_COMMENT_CONTENT: &str = "comments_content_not_blank_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if let Some(constraint) = db_err.constraint() {
            let mapped = match constraint {
                CNT_USER_USERNAME => Some(DomainError::Conflict("username already exists".into())),
                CNT_USER_EMAIL => Some(DomainError::Conflict("email already exists".into())),
                CNT_POST_AUTHOR => Some(DomainError::NotFound("author not found".into())),
                CNT_COMMENT_POST => Some(DomainError::NotFound("post not found".into())),
                CNT_COMMENT_PARENT => {
                    Some(DomainError::NotFound("parent comment not found".into()))
                }
                CNT_COMMENT_CONTENT => {
                    Some(DomainError::Validation("content is required".into()))
                }
                _ => None,
            };
            if let Some(mapped) = mapped {
                return mapped;
            }
        }

        if let Some(code) = db_err.code() {
            match code.as_ref() {
                "23505" => return DomainError::Conflict("unique constraint violated".into()),
                "23503" => return DomainError::NotFound("referenced record not found".into()),
                "23514" => return DomainError::Validation("check constraint violated".into()),
                _ => {}
            }
        }
    }

    let message = match &err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    };
    DomainError::persistence_with(message, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn non_database_errors_become_persistence_with_source() {
        let mapped = map_sqlx(sqlx::Error::PoolTimedOut);
        match &mapped {
            DomainError::Persistence { source, .. } => assert!(source.is_some()),
            other => panic!("unexpected mapping: {other:?}"),
        }
        assert!(mapped.source().is_some());
    }

    #[test]
    fn row_not_found_is_a_store_failure() {
        // Repositories use `fetch_optional`; a stray RowNotFound is unexpected.
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::Persistence { .. }
        ));
    }
}
