//! Service context - dependency container for services
//!
//! Holds the repositories and the token service needed by services.

use std::sync::Arc;

use weet_common::auth::JwtService;
use weet_core::traits::{FollowRepository, ReactionRepository, UserRepository, WeetRepository};
use weet_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    user_repo: Arc<dyn UserRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    weet_repo: Arc<dyn WeetRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        weet_repo: Arc<dyn WeetRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            follow_repo,
            weet_repo,
            reaction_repo,
            jwt_service,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the follow repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    /// Get the weet repository
    pub fn weet_repo(&self) -> &dyn WeetRepository {
        self.weet_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    weet_repo: Option<Arc<dyn WeetRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    pub fn weet_repo(mut self, repo: Arc<dyn WeetRepository>) -> Self {
        self.weet_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.follow_repo
                .ok_or_else(|| ServiceError::validation("follow_repo is required"))?,
            self.weet_repo
                .ok_or_else(|| ServiceError::validation("weet_repo is required"))?,
            self.reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
        ))
    }
}
