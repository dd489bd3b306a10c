// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostContent, PostId, PostRepository, PostTitle, PostUpdate,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const POST_COLUMNS: &str = "id, title, content, author_id, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            content: PostContent::new(row.content)?,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            content,
            author_id,
            created_at,
        } = post;

        let sql = format!(
            "INSERT INTO posts (title, content, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING {POST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(title.as_str())
            .bind(content.as_str())
            .bind(i64::from(author_id))
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1 AND deleted_at IS NULL");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list_page(&self, page: u32, page_size: u32) -> DomainResult<(Vec<Post>, u64)> {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let offset = i64::from(page - 1) * i64::from(page_size);

        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts
             WHERE deleted_at IS NULL
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(i64::from(page_size))
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(1) FROM posts WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;

        let posts = rows
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((posts, total.max(0) as u64))
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            content,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND deleted_at IS NULL RETURNING ");
        builder.push(POST_COLUMNS);

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        Post::try_from(row)
    }

    async fn soft_delete(&self, id: PostId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE posts SET deleted_at = $2 WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(i64::from(id))
        .bind(deleted_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}
