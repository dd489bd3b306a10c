mod get_by_id;
mod list_by_post;
mod service;

pub use get_by_id::GetCommentByIdQuery;
pub use list_by_post::ListPostCommentsQuery;
pub use service::CommentQueryService;
