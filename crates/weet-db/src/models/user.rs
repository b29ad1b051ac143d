//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub handle: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub user_description: Option<String>,
    pub profile_image: Option<String>,
    pub banner_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
