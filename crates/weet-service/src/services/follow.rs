//! Follow service
//!
//! Creates and removes directed follow edges between accounts.

use tracing::{info, instrument};

use weet_core::DomainError;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Follow service
pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    /// Create a new FollowService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Follow another account
    #[instrument(skip(self))]
    pub async fn follow(&self, follower: &str, followee: &str) -> ServiceResult<()> {
        self.check_pair(follower, followee).await?;

        // The composite primary key on follows is the authoritative guard;
        // the pre-check only produces the conflict before paying an insert
        if self.ctx.follow_repo().exists(follower, followee).await? {
            return Err(DomainError::AlreadyFollowing.into());
        }
        self.ctx.follow_repo().create(follower, followee).await?;

        info!(follower = %follower, followee = %followee, "Follow created");
        Ok(())
    }

    /// Stop following another account
    #[instrument(skip(self))]
    pub async fn unfollow(&self, follower: &str, followee: &str) -> ServiceResult<()> {
        self.check_pair(follower, followee).await?;

        let removed = self.ctx.follow_repo().delete(follower, followee).await?;
        if !removed {
            return Err(DomainError::NotFollowing.into());
        }

        info!(follower = %follower, followee = %followee, "Follow removed");
        Ok(())
    }

    /// Self-reference and unknown handles are rejected before any edge change
    async fn check_pair(&self, follower: &str, followee: &str) -> ServiceResult<()> {
        if follower == followee {
            return Err(DomainError::SelfFollow.into());
        }
        if !self.ctx.user_repo().handle_exists(followee).await? {
            return Err(ServiceError::not_found("User", followee));
        }
        if !self.ctx.user_repo().handle_exists(follower).await? {
            return Err(ServiceError::not_found("User", follower));
        }
        Ok(())
    }
}
