//! # weet-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `weet-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! Uniqueness invariants (handle, email, follow edges, reaction edges) are
//! enforced by database constraints; constraint violations are mapped to the
//! matching domain conflict instead of being pre-checked alone.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgFollowRepository, PgReactionRepository, PgUserRepository, PgWeetRepository,
};
