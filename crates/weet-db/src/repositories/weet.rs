//! PostgreSQL implementation of WeetRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use weet_core::entities::{Weet, WeetDetail};
use weet_core::traits::{RepoResult, WeetRepository};

use crate::models::{WeetDetailModel, WeetModel};

use super::error::{map_db_error, user_not_found, weet_not_found};

/// Build the enrichment query: weet row, author snippet, aggregate counts,
/// and viewer flags ($V binds the viewer handle). Correlated subqueries keep
/// the whole listing a single round trip.
fn detail_query(where_clause: &str, order_clause: &str) -> String {
    format!(
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
        FROM weets w
        JOIN users u ON u.handle = w.author
        WHERE {where_clause}
        ORDER BY {order_clause}
        ",
    )
}

/// PostgreSQL implementation of WeetRepository
#[derive(Clone)]
pub struct PgWeetRepository {
    pool: PgPool,
}

impl PgWeetRepository {
    /// Create a new PgWeetRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WeetRepository for PgWeetRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Weet>> {
        let result = sqlx::query_as::<_, WeetModel>(
            r"
            SELECT id, body, author, created_at
            FROM weets
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Weet::from))
    }

    #[instrument(skip(self, body))]
    async fn create(&self, body: &str, author: &str) -> RepoResult<Weet> {
        let result = sqlx::query_as::<_, WeetModel>(
            r"
            INSERT INTO weets (body, author)
            VALUES ($1, $2)
            RETURNING id, body, author, created_at
            ",
        )
        .bind(body)
        .bind(author)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // The author FK is the last line of defense; the service checks
            // existence first for a clean 404
            if e.as_database_error()
                .is_some_and(|db| db.is_foreign_key_violation())
            {
                user_not_found(author)
            } else {
                map_db_error(e)
            }
        })?;

        Ok(Weet::from(result))
    }

    #[instrument(skip(self, body))]
    async fn update_body(&self, id: i64, body: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE weets SET body = $2 WHERE id = $1
            ",
        )
        .bind(id)
        .bind(body)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(weet_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM weets WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(weet_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn detail(&self, id: i64, viewer: &str) -> RepoResult<Option<WeetDetail>> {
        let sql = detail_query("w.id = $1", "w.id");

        let result = sqlx::query_as::<_, WeetDetailModel>(&sql)
            .bind(id)
            .bind(viewer)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(WeetDetail::from))
    }

    #[instrument(skip(self))]
    async fn by_author(&self, author: &str, viewer: &str) -> RepoResult<Vec<WeetDetail>> {
        let sql = detail_query("w.author = $1", "w.created_at DESC, w.id DESC");

        let results = sqlx::query_as::<_, WeetDetailModel>(&sql)
            .bind(author)
            .bind(viewer)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(WeetDetail::from).collect())
    }

    #[instrument(skip(self))]
    async fn feed_for(&self, handle: &str) -> RepoResult<Vec<WeetDetail>> {
        // Own weets plus weets by everyone the handle follows; with zero
        // follows the subquery is empty and this degenerates to own weets
        let sql = detail_query(
            r"w.author = $1
               OR w.author IN (SELECT followee_handle FROM follows
                               WHERE follower_handle = $1)",
            "w.created_at DESC, w.id DESC",
        );

        let results = sqlx::query_as::<_, WeetDetailModel>(&sql)
            .bind(handle)
            .bind(handle)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(WeetDetail::from).collect())
    }
}
