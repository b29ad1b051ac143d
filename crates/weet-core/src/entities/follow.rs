//! Follow relationship types

use serde::Serialize;

use super::user::User;

/// Viewer-relative relationship flags attached to profile results.
///
/// `is_follower` - the viewer follows this profile.
/// `is_followee` - this profile follows the viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowStatus {
    pub is_follower: bool,
    pub is_followee: bool,
}

impl FollowStatus {
    /// Create a new FollowStatus
    pub fn new(is_follower: bool, is_followee: bool) -> Self {
        Self {
            is_follower,
            is_followee,
        }
    }

    /// True when neither side follows the other
    #[inline]
    pub fn is_unrelated(&self) -> bool {
        !self.is_follower && !self.is_followee
    }
}

/// A profile annotated with follow status relative to a viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub user: User,
    pub follow_status: FollowStatus,
}
