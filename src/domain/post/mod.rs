// src/domain/post/mod.rs
pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate};
pub use repository::PostRepository;
pub use specifications::CanModifyPostSpec;
pub use value_objects::{PostContent, PostId, PostTitle};
