//! Weet database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the weets table
#[derive(Debug, Clone, FromRow)]
pub struct WeetModel {
    pub id: i64,
    pub body: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// A weet row joined with its author snippet, aggregate reaction counts,
/// and viewer-relative reaction flags, all produced by a single query
#[derive(Debug, Clone, FromRow)]
pub struct WeetDetailModel {
    pub id: i64,
    pub body: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub author_username: String,
    pub author_image: Option<String>,
    pub reweet_count: i64,
    pub favorite_count: i64,
    pub tab_count: i64,
    pub reweeted: bool,
    pub favorited: bool,
    pub tabbed: bool,
}
