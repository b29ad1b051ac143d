//! Database models with SQLx FromRow derives

mod follow;
mod user;
mod weet;

pub use follow::{FollowStatusModel, ProfileViewModel};
pub use user::UserModel;
pub use weet::{WeetDetailModel, WeetModel};
