//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use weet_core::entities::{ProfileView, User};
use weet_core::error::DomainError;
use weet_core::traits::{RepoResult, UserRepository};

use crate::models::{ProfileViewModel, UserModel};

use super::error::{map_db_error, map_unique_constraint, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_handle(&self, handle: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT handle, username, email, password_hash, user_description,
                   profile_image, banner_image, created_at, updated_at
            FROM users
            WHERE handle = $1
            ",
        )
        .bind(handle)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn handle_exists(&self, handle: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE handle = $1)
            ",
        )
        .bind(handle)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT handle, username, email, password_hash, user_description,
                   profile_image, banner_image, created_at, updated_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (handle, username, email, password_hash, user_description,
                               profile_image, banner_image, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(&user.handle)
        .bind(&user.username)
        .bind(&user.email)
        .bind(password_hash)
        .bind(&user.user_description)
        .bind(&user.profile_image)
        .bind(&user.banner_image)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_constraint(e, |constraint| match constraint {
                Some("users_email_key") => DomainError::EmailTaken,
                _ => DomainError::HandleTaken,
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self, password_hash))]
    async fn update(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET username = $2, email = $3, user_description = $4,
                profile_image = $5, banner_image = $6,
                password_hash = COALESCE($7, password_hash),
                updated_at = NOW()
            WHERE handle = $1
            ",
        )
        .bind(&user.handle)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.user_description)
        .bind(&user.profile_image)
        .bind(&user.banner_image)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_constraint(e, |_| DomainError::EmailTaken))?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(&user.handle));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, handle: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM users WHERE handle = $1
            ",
        )
        .bind(handle)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(handle));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, handle: &str) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM users WHERE handle = $1
            ",
        )
        .bind(handle)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn search_by_username(
        &self,
        query: &str,
        viewer: &str,
    ) -> RepoResult<Vec<ProfileView>> {
        // Substring match plus both directed follow-edge lookups in a
        // single round trip; ordering is deterministic (username, handle)
        let results = sqlx::query_as::<_, ProfileViewModel>(
            r"
            SELECT u.handle, u.username, u.email, u.user_description,
                   u.profile_image, u.banner_image, u.created_at, u.updated_at,
                   EXISTS(SELECT 1 FROM follows f
                          WHERE f.follower_handle = $2 AND f.followee_handle = u.handle)
                       AS is_follower,
                   EXISTS(SELECT 1 FROM follows f
                          WHERE f.follower_handle = u.handle AND f.followee_handle = $2)
                       AS is_followee
            FROM users u
            WHERE POSITION(LOWER($1) IN LOWER(u.username)) > 0
            ORDER BY u.username, u.handle
            ",
        )
        .bind(query)
        .bind(viewer)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ProfileView::from).collect())
    }
}
