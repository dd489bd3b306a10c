// src/infrastructure/repositories/mod.rs
mod error;
mod memory_comment;
mod postgres_comment;
mod postgres_post;
mod postgres_user;

pub use error::map_sqlx;
pub use memory_comment::InMemoryCommentRepository;
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_post::PostgresPostRepository;
pub use postgres_user::PostgresUserRepository;
