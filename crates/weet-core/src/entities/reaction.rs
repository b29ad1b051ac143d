//! Reaction types - the three per-user-per-weet boolean relations

use std::fmt;

/// The three independent reaction relations. Each pairs a user with a weet
/// at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    Reweet,
    Favorite,
    Tab,
}

impl ReactionKind {
    /// Past-tense form used in conflict messages
    pub fn acted(&self) -> &'static str {
        match self {
            Self::Reweet => "reweeted",
            Self::Favorite => "favorited",
            Self::Tab => "tabbed",
        }
    }

    /// All reaction kinds
    pub fn all() -> [Self; 3] {
        [Self::Reweet, Self::Favorite, Self::Tab]
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reweet => "reweet",
            Self::Favorite => "favorite",
            Self::Tab => "tab",
        };
        write!(f, "{name}")
    }
}

/// Aggregate reaction counts for a weet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeetStats {
    pub reweets: i64,
    pub favorites: i64,
    pub tabs: i64,
}

impl WeetStats {
    /// Create a new WeetStats
    pub fn new(reweets: i64, favorites: i64, tabs: i64) -> Self {
        Self {
            reweets,
            favorites,
            tabs,
        }
    }
}

/// Viewer-relative reaction flags for a weet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeetChecks {
    pub reweeted: bool,
    pub favorited: bool,
    pub tabbed: bool,
}

impl WeetChecks {
    /// Create a new WeetChecks
    pub fn new(reweeted: bool, favorited: bool, tabbed: bool) -> Self {
        Self {
            reweeted,
            favorited,
            tabbed,
        }
    }
}
