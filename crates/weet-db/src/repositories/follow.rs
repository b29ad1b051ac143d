//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use weet_core::entities::{FollowStatus, ProfileView};
use weet_core::error::DomainError;
use weet_core::traits::{FollowRepository, RepoResult};

use crate::models::{FollowStatusModel, ProfileViewModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Edge rows resolved to viewer-annotated profiles. The join direction
    /// decides whether we list followers of a handle or accounts it follows;
    /// edge insertion order is preserved.
    async fn edge_profiles(
        &self,
        handle: &str,
        viewer: &str,
        followers: bool,
    ) -> RepoResult<Vec<ProfileView>> {
        let (join_col, where_col) = if followers {
            ("follower_handle", "followee_handle")
        } else {
            ("followee_handle", "follower_handle")
        };

        let sql = format!(
            r"
            SELECT u.handle, u.username, u.email, u.user_description,
                   u.profile_image, u.banner_image, u.created_at, u.updated_at,
                   EXISTS(SELECT 1 FROM follows x
                          WHERE x.follower_handle = $2 AND x.followee_handle = u.handle)
                       AS is_follower,
                   EXISTS(SELECT 1 FROM follows x
                          WHERE x.follower_handle = u.handle AND x.followee_handle = $2)
                       AS is_followee
            FROM follows f
            JOIN users u ON u.handle = f.{join_col}
            WHERE f.{where_col} = $1
            ORDER BY f.created_at, u.handle
            ",
        );

        let results = sqlx::query_as::<_, ProfileViewModel>(&sql)
            .bind(handle)
            .bind(viewer)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(ProfileView::from).collect())
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn exists(&self, follower: &str, followee: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM follows
                WHERE follower_handle = $1 AND followee_handle = $2
            )
            ",
        )
        .bind(follower)
        .bind(followee)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, follower: &str, followee: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO follows (follower_handle, followee_handle)
            VALUES ($1, $2)
            ",
        )
        .bind(follower)
        .bind(followee)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyFollowing))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, follower: &str, followee: &str) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM follows
            WHERE follower_handle = $1 AND followee_handle = $2
            ",
        )
        .bind(follower)
        .bind(followee)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn status(&self, viewer: &str, target: &str) -> RepoResult<FollowStatus> {
        let result = sqlx::query_as::<_, FollowStatusModel>(
            r"
            SELECT EXISTS(SELECT 1 FROM follows
                          WHERE follower_handle = $1 AND followee_handle = $2)
                       AS is_follower,
                   EXISTS(SELECT 1 FROM follows
                          WHERE follower_handle = $2 AND followee_handle = $1)
                       AS is_followee
            ",
        )
        .bind(viewer)
        .bind(target)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(FollowStatus::from(result))
    }

    #[instrument(skip(self))]
    async fn followers_of(&self, handle: &str, viewer: &str) -> RepoResult<Vec<ProfileView>> {
        self.edge_profiles(handle, viewer, true).await
    }

    #[instrument(skip(self))]
    async fn following_of(&self, handle: &str, viewer: &str) -> RepoResult<Vec<ProfileView>> {
        self.edge_profiles(handle, viewer, false).await
    }
}
