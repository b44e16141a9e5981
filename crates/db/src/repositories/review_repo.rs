//! Repository for the `reviews` table.

use sqlx::PgPool;
use tailwag_core::review::{REVIEW_APPROVED, REVIEW_PENDING};
use tailwag_core::types::DbId;

use crate::models::review::{CreateReview, Review};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, customer_name, rating, review_text, status, created_at, updated_at";

/// Provides CRUD and moderation operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Store a submitted review. New reviews are always `pending`.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (customer_name, rating, review_text, status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(&input.customer_name)
            .bind(input.rating)
            .bind(&input.review_text)
            .bind(REVIEW_PENDING)
            .fetch_one(pool)
            .await
    }

    /// Approved reviews only, newest first (public listing).
    pub async fn list_approved(pool: &PgPool) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE status = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(REVIEW_APPROVED)
            .fetch_all(pool)
            .await
    }

    /// Every review regardless of status, newest first (admin view).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Review>(&query).fetch_all(pool).await
    }

    /// Change a review's moderation status.
    ///
    /// The caller validates `status`. Returns `None` if no row with the given
    /// `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "UPDATE reviews SET status = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a review by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
