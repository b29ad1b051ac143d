//! Domain entities - core business objects

mod follow;
mod reaction;
mod user;
mod weet;

pub use follow::{FollowStatus, ProfileView};
pub use reaction::{ReactionKind, WeetChecks, WeetStats};
pub use user::User;
pub use weet::{Weet, WeetDetail};
