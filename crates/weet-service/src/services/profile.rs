//! Profile service
//!
//! Profile fetch, user search, and follower/following listings, all
//! annotated with follow status relative to the viewer.

use tracing::instrument;

use crate::dto::ProfileResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a profile; attaches follow status when a viewer is supplied
    #[instrument(skip(self))]
    pub async fn get(&self, handle: &str, viewer: Option<&str>) -> ServiceResult<ProfileResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_handle(handle)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", handle))?;

        let mut response = ProfileResponse::from(&user);
        if let Some(viewer) = viewer {
            let status = self.ctx.follow_repo().status(viewer, handle).await?;
            response = response.with_status(status);
        }

        Ok(response)
    }

    /// Case-insensitive substring search on username
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str, viewer: &str) -> ServiceResult<Vec<ProfileResponse>> {
        let hits = self
            .ctx
            .user_repo()
            .search_by_username(query, viewer)
            .await?;

        Ok(hits.into_iter().map(ProfileResponse::from).collect())
    }

    /// Accounts following `handle`, in edge insertion order
    #[instrument(skip(self))]
    pub async fn followers(
        &self,
        handle: &str,
        viewer: &str,
    ) -> ServiceResult<Vec<ProfileResponse>> {
        self.require_user(handle).await?;
        let profiles = self.ctx.follow_repo().followers_of(handle, viewer).await?;
        Ok(profiles.into_iter().map(ProfileResponse::from).collect())
    }

    /// Accounts `handle` follows, in edge insertion order
    #[instrument(skip(self))]
    pub async fn following(
        &self,
        handle: &str,
        viewer: &str,
    ) -> ServiceResult<Vec<ProfileResponse>> {
        self.require_user(handle).await?;
        let profiles = self.ctx.follow_repo().following_of(handle, viewer).await?;
        Ok(profiles.into_iter().map(ProfileResponse::from).collect())
    }

    async fn require_user(&self, handle: &str) -> ServiceResult<()> {
        if !self.ctx.user_repo().handle_exists(handle).await? {
            return Err(ServiceError::not_found("User", handle));
        }
        Ok(())
    }
}
