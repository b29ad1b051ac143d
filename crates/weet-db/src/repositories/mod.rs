//! PostgreSQL repository implementations

mod error;
mod follow;
mod reaction;
mod user;
mod weet;

pub use follow::PgFollowRepository;
pub use reaction::PgReactionRepository;
pub use user::PgUserRepository;
pub use weet::PgWeetRepository;
