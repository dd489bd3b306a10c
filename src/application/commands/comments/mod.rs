// src/application/commands/comments/mod.rs
mod create;
mod delete;
mod edit;
mod guard;
mod restore;
mod service;

pub use create::CreateCommentCommand;
pub use delete::DeleteCommentCommand;
pub use edit::EditCommentCommand;
pub use restore::RestoreCommentCommand;
pub use service::CommentCommandService;
