//! Repository for the `rates` table.
//!
//! The single-featured-rate rule is enforced here (clear-then-set inside one
//! transaction) and backed by the `uq_rates_single_featured` partial index.

use sqlx::PgPool;
use tailwag_core::types::DbId;

use crate::models::rate::{Rate, RateInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, service_name, price, unit_type, description, \
    is_active, is_featured, created_at, updated_at";

/// Provides CRUD operations for rates.
pub struct RateRepo;

impl RateRepo {
    /// List active rates in creation order (public price list).
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Rate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rates WHERE is_active = true ORDER BY id ASC");
        sqlx::query_as::<_, Rate>(&query).fetch_all(pool).await
    }

    /// List every rate regardless of the active flag (admin view).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Rate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rates ORDER BY id ASC");
        sqlx::query_as::<_, Rate>(&query).fetch_all(pool).await
    }

    /// The featured rate, if one is set and still active.
    pub async fn find_featured(pool: &PgPool) -> Result<Option<Rate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rates WHERE is_featured = true AND is_active = true"
        );
        sqlx::query_as::<_, Rate>(&query).fetch_optional(pool).await
    }

    /// Find a rate by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rates WHERE id = $1");
        sqlx::query_as::<_, Rate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new (never featured) rate, returning the created row.
    pub async fn create(pool: &PgPool, input: &RateInput) -> Result<Rate, sqlx::Error> {
        let query = format!(
            "INSERT INTO rates (service_name, price, unit_type, description, is_active)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rate>(&query)
            .bind(&input.service_name)
            .bind(input.price)
            .bind(&input.unit_type)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Replace the editable fields of a rate. The featured flag is kept.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &RateInput,
    ) -> Result<Option<Rate>, sqlx::Error> {
        let query = format!(
            "UPDATE rates SET
                service_name = $2,
                price = $3,
                unit_type = $4,
                description = $5,
                is_active = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rate>(&query)
            .bind(id)
            .bind(&input.service_name)
            .bind(input.price)
            .bind(&input.unit_type)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a rate by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Make `id` the only featured rate.
    ///
    /// Runs in a transaction: unset the current featured rate, then set the
    /// new one. If `id` does not exist the transaction is rolled back, the
    /// previous featured rate stays featured, and `None` is returned.
    pub async fn set_featured(pool: &PgPool, id: DbId) -> Result<Option<Rate>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("UPDATE rates SET is_featured = false WHERE is_featured = true AND id <> $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "UPDATE rates SET is_featured = true
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let rate = sqlx::query_as::<_, Rate>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if rate.is_some() {
            tx.commit().await?;
        }
        Ok(rate)
    }

    /// Unset the featured flag everywhere. Returns the number of rows changed.
    pub async fn clear_featured(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE rates SET is_featured = false WHERE is_featured = true")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
