//! Weet service
//!
//! Create, fetch, edit, and delete single weets.

use tracing::{info, instrument};

use weet_core::DomainError;

use crate::dto::WeetResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Weet service
pub struct WeetService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WeetService<'a> {
    /// Create a new WeetService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get one enriched weet
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64, viewer: &str) -> ServiceResult<WeetResponse> {
        let detail = self
            .ctx
            .weet_repo()
            .detail(id, viewer)
            .await?
            .ok_or(DomainError::WeetNotFound(id))?;

        Ok(WeetResponse::from(detail))
    }

    /// Post a new weet and return it enriched
    #[instrument(skip(self, body))]
    pub async fn create(&self, body: &str, author: &str) -> ServiceResult<WeetResponse> {
        if !self.ctx.user_repo().handle_exists(author).await? {
            return Err(ServiceError::not_found("User", author));
        }

        let weet = self.ctx.weet_repo().create(body, author).await?;
        info!(id = weet.id, author = %author, "Weet created");

        self.get(weet.id, author).await
    }

    /// Edit the text body of a weet; author and id never change
    #[instrument(skip(self, body))]
    pub async fn edit(&self, id: i64, body: &str, viewer: &str) -> ServiceResult<WeetResponse> {
        self.ctx.weet_repo().update_body(id, body).await?;
        info!(id = id, "Weet edited");

        self.get(id, viewer).await
    }

    /// Delete a weet; reaction edges cascade at the storage layer
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.weet_repo().delete(id).await?;
        info!(id = id, "Weet deleted");
        Ok(())
    }
}
