//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase
//! field names, matching what clients expect on the wire.

use chrono::{DateTime, Utc};
use serde::Serialize;

use weet_core::entities::{FollowStatus, ProfileView, User, WeetDetail};
use weet_core::validation::FieldReport;

// ============================================================================
// Common Response Types
// ============================================================================

/// Token envelope returned by sign-up, log-in, and profile update
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

impl TokenResponse {
    pub fn new(token: String) -> Self {
        Self { token }
    }
}

/// Message envelope for state-changing actions
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// List envelope: `{ "result": [...] }`
#[derive(Debug, Serialize)]
pub struct ResultListResponse<T> {
    pub result: Vec<T>,
}

impl<T> ResultListResponse<T> {
    pub fn new(result: Vec<T>) -> Self {
        Self { result }
    }
}

/// Single-item envelope: `{ "result": ... }`
#[derive(Debug, Serialize)]
pub struct ResultResponse<T> {
    pub result: T,
}

impl<T> ResultResponse<T> {
    pub fn new(result: T) -> Self {
        Self { result }
    }
}

/// Single-profile envelope: `{ "user": ... }`
#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub user: ProfileResponse,
}

impl UserEnvelope {
    pub fn new(user: ProfileResponse) -> Self {
        Self { user }
    }
}

// ============================================================================
// Profile Responses
// ============================================================================

/// A profile, optionally annotated with follow status relative to the viewer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub handle: String,
    pub username: String,
    pub email: String,
    pub user_description: Option<String>,
    pub profile_image: Option<String>,
    pub banner_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_status: Option<FollowStatus>,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            handle: user.handle.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            user_description: user.user_description.clone(),
            profile_image: user.profile_image.clone(),
            banner_image: user.banner_image.clone(),
            follow_status: None,
        }
    }
}

impl ProfileResponse {
    /// Attach viewer-relative follow status
    pub fn with_status(mut self, status: FollowStatus) -> Self {
        self.follow_status = Some(status);
        self
    }
}

impl From<ProfileView> for ProfileResponse {
    fn from(view: ProfileView) -> Self {
        ProfileResponse::from(&view.user).with_status(view.follow_status)
    }
}

// ============================================================================
// Weet Responses
// ============================================================================

/// Aggregate reaction counts
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsResponse {
    pub reweets: i64,
    pub favorites: i64,
    pub tabs: i64,
}

/// Author profile snippet attached to each weet
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoResponse {
    pub handle: String,
    pub username: String,
    pub profile_image: Option<String>,
}

/// Viewer-relative reaction flags
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChecksResponse {
    pub reweeted: bool,
    pub favorited: bool,
    pub tabbed: bool,
}

/// An enriched weet as served to clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeetResponse {
    pub id: i64,
    pub weet: String,
    pub author: String,
    pub time_date: DateTime<Utc>,
    pub date: String,
    pub time: String,
    pub stats: StatsResponse,
    pub user_info: UserInfoResponse,
    pub checks: ChecksResponse,
}

impl From<WeetDetail> for WeetResponse {
    fn from(detail: WeetDetail) -> Self {
        let date = detail.weet.date_string();
        let time = detail.weet.time_string();
        Self {
            id: detail.weet.id,
            weet: detail.weet.body,
            author: detail.weet.author.clone(),
            time_date: detail.weet.created_at,
            date,
            time,
            stats: StatsResponse {
                reweets: detail.stats.reweets,
                favorites: detail.stats.favorites,
                tabs: detail.stats.tabs,
            },
            user_info: UserInfoResponse {
                handle: detail.weet.author,
                username: detail.author_username,
                profile_image: detail.author_image,
            },
            checks: ChecksResponse {
                reweeted: detail.checks.reweeted,
                favorited: detail.checks.favorited,
                tabbed: detail.checks.tabbed,
            },
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}

// ============================================================================
// Validation Reports
// ============================================================================

/// Per-field validity report for registration
#[derive(Debug, Clone, Serialize)]
pub struct SignUpReport {
    pub handle: FieldReport,
    pub username: FieldReport,
    pub password: FieldReport,
    pub email: FieldReport,
}

impl SignUpReport {
    /// True when every field passed
    pub fn is_valid(&self) -> bool {
        self.handle.is_valid
            && self.username.is_valid
            && self.password.is_valid
            && self.email.is_valid
    }
}

/// Per-field validity report for a profile update. The newPassword field is
/// omitted entirely when no new password was supplied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileReport {
    pub username: FieldReport,
    pub email: FieldReport,
    pub user_description: FieldReport,
    pub profile_picture: FieldReport,
    pub banner_picture: FieldReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<FieldReport>,
}

impl UpdateProfileReport {
    /// True when every reported field passed
    pub fn is_valid(&self) -> bool {
        self.username.is_valid
            && self.email.is_valid
            && self.user_description.is_valid
            && self.profile_picture.is_valid
            && self.banner_picture.is_valid
            && self.new_password.as_ref().is_none_or(|r| r.is_valid)
    }
}
