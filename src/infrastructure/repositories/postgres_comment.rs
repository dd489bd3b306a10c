// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::comment::{
    Comment, CommentContent, CommentId, CommentRepository, CommentState, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COMMENT_COLUMNS: &str =
    "id, content, author_id, post_id, parent_id, created_at, updated_at, deleted_at";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: CommentId, live_only: bool) -> DomainResult<Option<Comment>> {
        let filter = if live_only { " AND deleted_at IS NULL" } else { "" };
        let sql = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1{filter}");
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    content: String,
    author_id: i64,
    post_id: i64,
    parent_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            content: CommentContent::new(row.content)?,
            author_id: UserId::new(row.author_id)?,
            post_id: PostId::new(row.post_id)?,
            parent_id: row.parent_id.map(CommentId::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
            state: CommentState::from_deleted_at(row.deleted_at),
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            content,
            author_id,
            post_id,
            parent_id,
            created_at,
        } = comment;

        let sql = format!(
            "INSERT INTO comments (content, author_id, post_id, parent_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(content.into_inner())
            .bind(i64::from(author_id))
            .bind(i64::from(post_id))
            .bind(parent_id.map(i64::from))
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_live(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        self.fetch(id, true).await
    }

    async fn find_any(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        self.fetch(id, false).await
    }

    async fn update_content(
        &self,
        id: CommentId,
        content: CommentContent,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Comment> {
        let sql = format!(
            "UPDATE comments SET content = $1, updated_at = $2
             WHERE id = $3
             RETURNING {COMMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(content.into_inner())
            .bind(updated_at)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;

        Comment::try_from(row)
    }

    async fn soft_delete(
        &self,
        id: CommentId,
        cascade: bool,
        deleted_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let id = i64::from(id);

        if !cascade {
            let result = sqlx::query(
                "UPDATE comments SET deleted_at = $2 WHERE id = $1 AND deleted_at IS NULL",
            )
            .bind(id)
            .bind(deleted_at)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
            return Ok(result.rows_affected());
        }

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let root = sqlx::query(
            "UPDATE comments SET deleted_at = $2 WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(deleted_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let children = sqlx::query(
            "UPDATE comments SET deleted_at = $2 WHERE parent_id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(deleted_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        Ok(root.rows_affected() + children.rows_affected())
    }

    async fn restore(&self, id: CommentId, cascade: bool) -> DomainResult<u64> {
        let id = i64::from(id);

        if !cascade {
            let result = sqlx::query(
                "UPDATE comments SET deleted_at = NULL WHERE id = $1 AND deleted_at IS NOT NULL",
            )
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
            return Ok(result.rows_affected());
        }

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let root = sqlx::query(
            "UPDATE comments SET deleted_at = NULL WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let children = sqlx::query(
            "UPDATE comments SET deleted_at = NULL
             WHERE parent_id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        Ok(root.rows_affected() + children.rows_affected())
    }

    async fn list_live_by_post(&self, post_id: PostId) -> DomainResult<Vec<Comment>> {
        let sql = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE post_id = $1 AND deleted_at IS NULL
             ORDER BY created_at ASC, id ASC"
        );
        let rows = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(i64::from(post_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
