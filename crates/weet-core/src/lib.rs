//! # weet-core
//!
//! Domain layer containing entities, validation rules, repository traits,
//! and domain errors. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod validation;

// Re-export commonly used types at crate root
pub use entities::{
    FollowStatus, ProfileView, ReactionKind, User, Weet, WeetChecks, WeetDetail, WeetStats,
};
pub use error::DomainError;
pub use traits::{
    FollowRepository, ReactionRepository, RepoResult, UserRepository, WeetRepository,
};
pub use validation::FieldReport;
