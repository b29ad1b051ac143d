//! User entity - represents a registered account

use chrono::{DateTime, Utc};

/// User entity. The handle is the primary identifier and never changes
/// after registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub handle: String,
    pub username: String,
    pub email: String,
    pub user_description: Option<String>,
    pub profile_image: Option<String>,
    pub banner_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(handle: String, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            handle,
            username,
            email,
            user_description: None,
            profile_image: None,
            banner_image: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether this account owns the given handle
    #[inline]
    pub fn owns(&self, handle: &str) -> bool {
        self.handle == handle
    }

    /// Update the display name
    pub fn set_username(&mut self, username: String) {
        self.username = username;
        self.updated_at = Utc::now();
    }

    /// Update the profile description
    pub fn set_description(&mut self, description: Option<String>) {
        self.user_description = description;
        self.updated_at = Utc::now();
    }
}
