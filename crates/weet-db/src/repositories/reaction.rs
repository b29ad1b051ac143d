//! PostgreSQL implementation of ReactionRepository
//!
//! The three reaction relations share one shape across separate tables, so
//! every query is built from the kind's table name.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use weet_core::entities::{ReactionKind, WeetDetail};
use weet_core::error::DomainError;
use weet_core::traits::{ReactionRepository, RepoResult};

use crate::models::WeetDetailModel;

use super::error::{map_db_error, map_unique_violation};

/// Table backing a reaction kind
fn table(kind: ReactionKind) -> &'static str {
    match kind {
        ReactionKind::Reweet => "reweets",
        ReactionKind::Favorite => "favorites",
        ReactionKind::Tab => "tabs",
    }
}

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn exists(&self, kind: ReactionKind, handle: &str, weet_id: i64) -> RepoResult<bool> {
        let sql = format!(
            r"
            SELECT EXISTS(
                SELECT 1 FROM {} WHERE user_handle = $1 AND weet_id = $2
            )
            ",
            table(kind)
        );

        let result = sqlx::query_scalar::<_, bool>(&sql)
            .bind(handle)
            .bind(weet_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, kind: ReactionKind, handle: &str, weet_id: i64) -> RepoResult<()> {
        let sql = format!(
            r"
            INSERT INTO {} (user_handle, weet_id) VALUES ($1, $2)
            ",
            table(kind)
        );

        sqlx::query(&sql)
            .bind(handle)
            .bind(weet_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::ReactionExists(kind)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, kind: ReactionKind, handle: &str, weet_id: i64) -> RepoResult<bool> {
        let sql = format!(
            r"
            DELETE FROM {} WHERE user_handle = $1 AND weet_id = $2
            ",
            table(kind)
        );

        let result = sqlx::query(&sql)
            .bind(handle)
            .bind(weet_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count(&self, kind: ReactionKind, weet_id: i64) -> RepoResult<i64> {
        let sql = format!(
            r"
            SELECT COUNT(*) FROM {} WHERE weet_id = $1
            ",
            table(kind)
        );

        let result = sqlx::query_scalar::<_, i64>(&sql)
            .bind(weet_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn reacted_by(
        &self,
        kind: ReactionKind,
        handle: &str,
        viewer: &str,
    ) -> RepoResult<Vec<WeetDetail>> {
        // Newest reaction first, not newest weet first
        let sql = format!(
            r"
            SELECT w.id, w.body, w.author, w.created_at,
                   u.username AS author_username,
                   u.profile_image AS author_image,
                   (SELECT COUNT(*) FROM reweets r WHERE r.weet_id = w.id) AS reweet_count,
                   (SELECT COUNT(*) FROM favorites fv WHERE fv.weet_id = w.id) AS favorite_count,
                   (SELECT COUNT(*) FROM tabs t WHERE t.weet_id = w.id) AS tab_count,
                   EXISTS(SELECT 1 FROM reweets r
                          WHERE r.weet_id = w.id AND r.user_handle = $2) AS reweeted,
                   EXISTS(SELECT 1 FROM favorites fv
                          WHERE fv.weet_id = w.id AND fv.user_handle = $2) AS favorited,
                   EXISTS(SELECT 1 FROM tabs t
                          WHERE t.weet_id = w.id AND t.user_handle = $2) AS tabbed
            FROM {} e
            JOIN weets w ON w.id = e.weet_id
            JOIN users u ON u.handle = w.author
            WHERE e.user_handle = $1
            ORDER BY e.created_at DESC, w.id DESC
            ",
            table(kind)
        );

        let results = sqlx::query_as::<_, WeetDetailModel>(&sql)
            .bind(handle)
            .bind(viewer)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(WeetDetail::from).collect())
    }
}
