//! Follow-related database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Both directed-edge lookups between a viewer and a target
#[derive(Debug, Clone, Copy, FromRow)]
pub struct FollowStatusModel {
    pub is_follower: bool,
    pub is_followee: bool,
}

/// A user row annotated with follow status relative to a viewer
#[derive(Debug, Clone, FromRow)]
pub struct ProfileViewModel {
    pub handle: String,
    pub username: String,
    pub email: String,
    pub user_description: Option<String>,
    pub profile_image: Option<String>,
    pub banner_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_follower: bool,
    pub is_followee: bool,
}
