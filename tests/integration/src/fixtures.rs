//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct SignUpRequest {
    pub handle: String,
    pub username: String,
    pub password: String,
    pub email: String,
}

impl SignUpRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            handle: format!("handle{suffix:08}"),
            username: format!("test username {suffix}"),
            password: "TestPass123!".to_string(),
            email: format!("test{suffix}@example.com"),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LogInRequest {
    pub handle: String,
    pub password: String,
}

impl LogInRequest {
    pub fn from_sign_up(reg: &SignUpRequest) -> Self {
        Self {
            handle: reg.handle.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Body carrying only the token
#[derive(Debug, Serialize)]
pub struct TokenBody {
    #[serde(rename = "_token")]
    pub token: String,
}

impl TokenBody {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }
}

/// Weet creation / edit body
#[derive(Debug, Serialize)]
pub struct WeetBody {
    #[serde(rename = "_token")]
    pub token: String,
    pub weet: String,
}

impl WeetBody {
    pub fn new(token: &str, weet: &str) -> Self {
        Self {
            token: token.to_string(),
            weet: weet.to_string(),
        }
    }
}

/// Profile update body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileBody {
    #[serde(rename = "_token")]
    pub token: String,
    pub username: String,
    pub old_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_picture: Option<String>,
}

impl UpdateProfileBody {
    /// A no-op update for a freshly registered account
    pub fn keep_current(token: &str, reg: &SignUpRequest) -> Self {
        Self {
            token: token.to_string(),
            username: reg.username.clone(),
            old_password: reg.password.clone(),
            new_password: None,
            email: reg.email.clone(),
            user_description: None,
            profile_picture: None,
            banner_picture: None,
        }
    }
}

// ============================================================================
// Response shapes
// ============================================================================

/// Token response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List envelope
#[derive(Debug, Deserialize)]
pub struct ResultList<T> {
    pub result: Vec<T>,
}

/// Single-item envelope
#[derive(Debug, Deserialize)]
pub struct ResultItem<T> {
    pub result: T,
}

/// Profile envelope
#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    pub user: Profile,
}

/// Profile response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub handle: String,
    pub username: String,
    pub email: String,
    pub follow_status: Option<FollowStatus>,
}

/// Follow status flags
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowStatus {
    pub is_follower: bool,
    pub is_followee: bool,
}

/// Enriched weet response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeetResponse {
    pub id: i64,
    pub weet: String,
    pub author: String,
    pub date: String,
    pub time: String,
    pub stats: Stats,
    pub user_info: UserInfo,
    pub checks: Checks,
}

/// Aggregate reaction counts
#[derive(Debug, Deserialize)]
pub struct Stats {
    pub reweets: i64,
    pub favorites: i64,
    pub tabs: i64,
}

/// Author snippet
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub handle: String,
    pub username: String,
    pub profile_image: Option<String>,
}

/// Viewer-relative reaction flags
#[derive(Debug, Deserialize)]
pub struct Checks {
    pub reweeted: bool,
    pub favorited: bool,
    pub tabbed: bool,
}

/// One field of a validation report
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReport {
    pub is_valid: bool,
    pub messages: Vec<String>,
}

/// Sign-up validation report
#[derive(Debug, Deserialize)]
pub struct SignUpReport {
    pub handle: FieldReport,
    pub username: FieldReport,
    pub password: FieldReport,
    pub email: FieldReport,
}

/// Update-profile validation report
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileReport {
    pub username: FieldReport,
    pub email: FieldReport,
    pub new_password: Option<FieldReport>,
}

/// Error body shape
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
}
