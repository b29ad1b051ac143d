//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::ReactionKind;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Weet not found: {0}")]
    WeetNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Handle is already in use")]
    HandleTaken,

    #[error("Email is already in use")]
    EmailTaken,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the author of this weet")]
    NotWeetAuthor,

    #[error("Not the owner of this profile")]
    NotProfileOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Users cannot follow their own account")]
    SelfFollow,

    #[error("Already following this user")]
    AlreadyFollowing,

    #[error("No existing follow to remove")]
    NotFollowing,

    #[error("Weet has already been {}", .0.acted())]
    ReactionExists(ReactionKind),

    #[error("Weet has not been {}", .0.acted())]
    ReactionMissing(ReactionKind),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::WeetNotFound(_) => "UNKNOWN_WEET",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::HandleTaken => "HANDLE_TAKEN",
            Self::EmailTaken => "EMAIL_TAKEN",

            // Authorization
            Self::NotWeetAuthor => "NOT_WEET_AUTHOR",
            Self::NotProfileOwner => "NOT_PROFILE_OWNER",

            // Conflict
            Self::SelfFollow => "SELF_FOLLOW",
            Self::AlreadyFollowing => "ALREADY_FOLLOWING",
            Self::NotFollowing => "NOT_FOLLOWING",
            Self::ReactionExists(_) => "REACTION_EXISTS",
            Self::ReactionMissing(_) => "REACTION_MISSING",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::WeetNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::MissingField(_) | Self::HandleTaken | Self::EmailTaken
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotWeetAuthor | Self::NotProfileOwner)
    }

    /// Check if this is a conflict error (duplicate or missing state)
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::SelfFollow
                | Self::AlreadyFollowing
                | Self::NotFollowing
                | Self::ReactionExists(_)
                | Self::ReactionMissing(_)
        )
    }
}
