//! Repository for the `contacts` table (append-only inquiries).

use sqlx::PgPool;
use tailwag_core::types::DbId;

use crate::models::contact::{Contact, CreateContact};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, email, phone, best_time, service, pet_info, dates, message, created_at";

/// Provides insert, list and delete operations for contact inquiries.
pub struct ContactRepo;

impl ContactRepo {
    /// Store a submitted inquiry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts
                (name, email, phone, best_time, service, pet_info, dates, message)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.best_time)
            .bind(&input.service)
            .bind(&input.pet_info)
            .bind(&input.dates)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List all inquiries, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }

    /// Delete an inquiry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
