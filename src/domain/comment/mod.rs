// src/domain/comment/mod.rs
pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Comment, NewComment};
pub use repository::CommentRepository;
pub use specifications::{CanMutateCommentSpec, CommentOperation};
pub use value_objects::{CommentContent, CommentId, CommentState};
