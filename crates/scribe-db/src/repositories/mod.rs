//! PostgreSQL repository implementations

mod comment;
pub mod error;
mod follow;
mod group;
mod post;
mod user;

pub use comment::PgCommentRepository;
pub use follow::PgFollowRepository;
pub use group::PgGroupRepository;
pub use post::PgPostRepository;
pub use user::PgUserRepository;
