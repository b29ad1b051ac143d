//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{FollowStatus, ProfileView, ReactionKind, User, Weet, WeetDetail};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by handle
    async fn find_by_handle(&self, handle: &str) -> RepoResult<Option<User>>;

    /// Check if a handle is already registered
    async fn handle_exists(&self, handle: &str) -> RepoResult<bool>;

    /// Find the account owning an email address
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if an email is already registered
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update profile fields; rotates the stored hash when one is supplied
    async fn update(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()>;

    /// Delete a user; dependent rows cascade at the storage layer
    async fn delete(&self, handle: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, handle: &str) -> RepoResult<Option<String>>;

    /// Case-insensitive substring search on username, annotated with
    /// follow status relative to the viewer
    async fn search_by_username(&self, query: &str, viewer: &str)
        -> RepoResult<Vec<ProfileView>>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Check whether a directed follow edge exists
    async fn exists(&self, follower: &str, followee: &str) -> RepoResult<bool>;

    /// Insert a follow edge; a duplicate surfaces as `AlreadyFollowing`
    /// via the composite unique constraint
    async fn create(&self, follower: &str, followee: &str) -> RepoResult<()>;

    /// Remove a follow edge; returns false when no edge existed
    async fn delete(&self, follower: &str, followee: &str) -> RepoResult<bool>;

    /// Both directed-edge lookups between viewer and target in one round trip
    async fn status(&self, viewer: &str, target: &str) -> RepoResult<FollowStatus>;

    /// Accounts following `handle`, viewer-annotated, in edge insertion order
    async fn followers_of(&self, handle: &str, viewer: &str) -> RepoResult<Vec<ProfileView>>;

    /// Accounts `handle` follows, viewer-annotated, in edge insertion order
    async fn following_of(&self, handle: &str, viewer: &str) -> RepoResult<Vec<ProfileView>>;
}

// ============================================================================
// Weet Repository
// ============================================================================

#[async_trait]
pub trait WeetRepository: Send + Sync {
    /// Find weet by id (bare row, no enrichment)
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Weet>>;

    /// Insert a new weet and return the stored row
    async fn create(&self, body: &str, author: &str) -> RepoResult<Weet>;

    /// Update the text body only
    async fn update_body(&self, id: i64, body: &str) -> RepoResult<()>;

    /// Delete a weet; reaction edges cascade at the storage layer
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Find weet by id with stats, author snippet, and viewer checks
    async fn detail(&self, id: i64, viewer: &str) -> RepoResult<Option<WeetDetail>>;

    /// Weets authored by `author`, newest first, enriched for `viewer`
    async fn by_author(&self, author: &str, viewer: &str) -> RepoResult<Vec<WeetDetail>>;

    /// Weets authored by `handle` or anyone `handle` follows, newest first
    async fn feed_for(&self, handle: &str) -> RepoResult<Vec<WeetDetail>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Check whether a reaction edge exists
    async fn exists(&self, kind: ReactionKind, handle: &str, weet_id: i64) -> RepoResult<bool>;

    /// Insert a reaction edge; a duplicate surfaces as `ReactionExists`
    /// via the composite unique constraint
    async fn create(&self, kind: ReactionKind, handle: &str, weet_id: i64) -> RepoResult<()>;

    /// Remove a reaction edge; returns false when no edge existed
    async fn delete(&self, kind: ReactionKind, handle: &str, weet_id: i64) -> RepoResult<bool>;

    /// Number of edges of this kind referencing the weet
    async fn count(&self, kind: ReactionKind, weet_id: i64) -> RepoResult<i64>;

    /// Weets `handle` reacted to with this kind, newest reaction first,
    /// enriched for `viewer`
    async fn reacted_by(
        &self,
        kind: ReactionKind,
        handle: &str,
        viewer: &str,
    ) -> RepoResult<Vec<WeetDetail>>;
}
