//! Weet entity - a single post

use chrono::{DateTime, Utc};

use super::reaction::{WeetChecks, WeetStats};

/// Weet entity. The id and author are immutable; only the body may change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weet {
    pub id: i64,
    pub body: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl Weet {
    /// Create a new Weet
    pub fn new(id: i64, body: String, author: String) -> Self {
        Self {
            id,
            body,
            author,
            created_at: Utc::now(),
        }
    }

    /// Display date derived from the creation timestamp, e.g. "March 4, 2025"
    pub fn date_string(&self) -> String {
        self.created_at.format("%B %-d, %Y").to_string()
    }

    /// Display time derived from the creation timestamp, e.g. "2:07 PM"
    pub fn time_string(&self) -> String {
        self.created_at.format("%-I:%M %p").to_string()
    }
}

/// Weet enriched for display: aggregate reaction counts, an author profile
/// snippet, and viewer-relative reaction flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeetDetail {
    pub weet: Weet,
    pub author_username: String,
    pub author_image: Option<String>,
    pub stats: WeetStats,
    pub checks: WeetChecks,
}
