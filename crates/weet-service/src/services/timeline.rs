//! Timeline service
//!
//! Weet listings: a user's authored weets, their reacted weets, and the
//! home feed. All listings come back newest-first and enriched.

use tracing::instrument;

use weet_core::ReactionKind;

use crate::dto::WeetResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Timeline service
pub struct TimelineService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TimelineService<'a> {
    /// Create a new TimelineService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Weets authored by `handle`, newest first
    #[instrument(skip(self))]
    pub async fn weets_of(&self, handle: &str, viewer: &str) -> ServiceResult<Vec<WeetResponse>> {
        self.require_user(handle).await?;
        let details = self.ctx.weet_repo().by_author(handle, viewer).await?;
        Ok(details.into_iter().map(WeetResponse::from).collect())
    }

    /// Weets `handle` reacted to with `kind`, newest reaction first
    #[instrument(skip(self))]
    pub async fn reacted_of(
        &self,
        kind: ReactionKind,
        handle: &str,
        viewer: &str,
    ) -> ServiceResult<Vec<WeetResponse>> {
        self.require_user(handle).await?;
        let details = self
            .ctx
            .reaction_repo()
            .reacted_by(kind, handle, viewer)
            .await?;
        Ok(details.into_iter().map(WeetResponse::from).collect())
    }

    /// Home feed: own weets plus weets by every followed account, strictly
    /// newest first; with zero follows this equals the user's own weets
    #[instrument(skip(self))]
    pub async fn feed(&self, handle: &str) -> ServiceResult<Vec<WeetResponse>> {
        self.require_user(handle).await?;
        let details = self.ctx.weet_repo().feed_for(handle).await?;
        Ok(details.into_iter().map(WeetResponse::from).collect())
    }

    async fn require_user(&self, handle: &str) -> ServiceResult<()> {
        if !self.ctx.user_repo().handle_exists(handle).await? {
            return Err(ServiceError::not_found("User", handle));
        }
        Ok(())
    }
}
