//! Reaction service
//!
//! Toggles the three per-user-per-weet relations. Each relation is a two
//! state machine {absent, present}; redundant transitions are rejected
//! rather than silently absorbed.

use tracing::{info, instrument};

use weet_core::{DomainError, ReactionKind};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a reaction edge (absent -> present)
    #[instrument(skip(self))]
    pub async fn add(&self, kind: ReactionKind, handle: &str, weet_id: i64) -> ServiceResult<()> {
        self.check_pair(handle, weet_id).await?;

        // The composite primary key is the authoritative duplicate guard
        if self.ctx.reaction_repo().exists(kind, handle, weet_id).await? {
            return Err(DomainError::ReactionExists(kind).into());
        }
        self.ctx.reaction_repo().create(kind, handle, weet_id).await?;

        info!(kind = %kind, handle = %handle, weet_id = weet_id, "Reaction added");
        Ok(())
    }

    /// Remove a reaction edge (present -> absent)
    #[instrument(skip(self))]
    pub async fn remove(
        &self,
        kind: ReactionKind,
        handle: &str,
        weet_id: i64,
    ) -> ServiceResult<()> {
        self.check_pair(handle, weet_id).await?;

        let removed = self.ctx.reaction_repo().delete(kind, handle, weet_id).await?;
        if !removed {
            return Err(DomainError::ReactionMissing(kind).into());
        }

        info!(kind = %kind, handle = %handle, weet_id = weet_id, "Reaction removed");
        Ok(())
    }

    /// Weet and user existence are validated before any edge change
    async fn check_pair(&self, handle: &str, weet_id: i64) -> ServiceResult<()> {
        if self.ctx.weet_repo().find_by_id(weet_id).await?.is_none() {
            return Err(DomainError::WeetNotFound(weet_id).into());
        }
        if !self.ctx.user_repo().handle_exists(handle).await? {
            return Err(ServiceError::not_found("User", handle));
        }
        Ok(())
    }
}
