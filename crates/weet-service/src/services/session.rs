//! Session gates
//!
//! Token-based authentication and authorization checks used by every
//! protected route. The boolean gates fail closed and never error; the
//! `require_*` variants produce the matching 401/404 errors for handlers.

use tracing::{instrument, warn};

use weet_common::auth::Claims;
use weet_common::AppError;
use weet_core::entities::Weet;
use weet_core::DomainError;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Session gate service
pub struct SessionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SessionService<'a> {
    /// Create a new SessionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Boolean signed-in gate. False on a missing or non-string token, an
    /// undecodable token, a payload without a handle, or a handle that is
    /// not in the user table. Never errors; a failed lookup counts as
    /// signed out.
    #[instrument(skip(self, token))]
    pub async fn is_signed_in(&self, token: Option<&str>) -> bool {
        let Some(token) = token else {
            return false;
        };
        let Ok(claims) = self.ctx.jwt_service().decode(token) else {
            return false;
        };
        matches!(
            self.ctx.user_repo().handle_exists(&claims.handle).await,
            Ok(true)
        )
    }

    /// True only when the token's signature verifies against this service's
    /// own secret; fails closed on malformed or foreign-signed tokens
    #[must_use]
    pub fn token_origin(&self, token: Option<&str>) -> bool {
        token.is_some_and(|t| self.ctx.jwt_service().verify_origin(t))
    }

    /// Decode the token and confirm the account still exists
    #[instrument(skip(self, token))]
    pub async fn require_signed_in(&self, token: Option<&str>) -> ServiceResult<Claims> {
        let token = token.ok_or(AppError::MissingAuth)?;
        let claims = self.ctx.jwt_service().decode(token).map_err(|e| {
            warn!("Rejected token with bad signature or malformed claims");
            e
        })?;
        if !self.ctx.user_repo().handle_exists(&claims.handle).await? {
            warn!(handle = %claims.handle, "Token handle no longer registered");
            return Err(AppError::InvalidToken.into());
        }
        Ok(claims)
    }

    /// The token's handle must match the target profile's handle
    #[instrument(skip(self, token))]
    pub async fn require_owner(&self, token: Option<&str>, handle: &str) -> ServiceResult<Claims> {
        let claims = self.require_signed_in(token).await?;
        if claims.handle != handle {
            warn!(actor = %claims.handle, target = %handle, "Ownership check failed");
            return Err(DomainError::NotProfileOwner.into());
        }
        Ok(claims)
    }

    /// The token's handle must match the weet's author. The weet must exist
    /// first, so an unknown id answers 404 rather than 401.
    #[instrument(skip(self, token))]
    pub async fn require_author(
        &self,
        token: Option<&str>,
        weet_id: i64,
    ) -> ServiceResult<(Claims, Weet)> {
        let claims = self.require_signed_in(token).await?;
        let weet = self
            .ctx
            .weet_repo()
            .find_by_id(weet_id)
            .await?
            .ok_or(DomainError::WeetNotFound(weet_id))?;
        if weet.author != claims.handle {
            warn!(actor = %claims.handle, author = %weet.author, "Authorship check failed");
            return Err(DomainError::NotWeetAuthor.into());
        }
        Ok((claims, weet))
    }
}
