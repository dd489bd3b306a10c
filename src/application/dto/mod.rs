pub mod auth;
pub mod comments;
pub mod pagination;
pub mod posts;
pub mod serde_time;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use comments::CommentDto;
pub use pagination::PaginatedResult;
pub use posts::PostDto;
pub use users::UserDto;
