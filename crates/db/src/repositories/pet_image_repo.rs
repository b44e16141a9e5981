//! Repository for the `pet_images` table.

use sqlx::PgPool;
use tailwag_core::types::DbId;

use crate::models::pet::{CreatePetImage, PetImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, pet_id, url, is_primary, display_order, created_at";

/// Provides CRUD operations for pet images.
pub struct PetImageRepo;

impl PetImageRepo {
    /// Insert a new image row, returning the created row.
    ///
    /// If `is_primary` is `None`, defaults to `false`; `display_order`
    /// defaults to `0`.
    pub async fn create(pool: &PgPool, input: &CreatePetImage) -> Result<PetImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO pet_images (pet_id, url, is_primary, display_order)
             VALUES ($1, $2, COALESCE($3, false), COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PetImage>(&query)
            .bind(input.pet_id)
            .bind(&input.url)
            .bind(input.is_primary)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find an image by ID, scoped to the pet that owns it.
    pub async fn find_for_pet(
        pool: &PgPool,
        pet_id: DbId,
        image_id: DbId,
    ) -> Result<Option<PetImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pet_images WHERE id = $1 AND pet_id = $2");
        sqlx::query_as::<_, PetImage>(&query)
            .bind(image_id)
            .bind(pet_id)
            .fetch_optional(pool)
            .await
    }

    /// Make one image the pet's primary image.
    ///
    /// Runs in a transaction: clear the flag on all of the pet's images, then
    /// set it on the target. Returns `None` (and changes nothing) if the image
    /// does not belong to the pet.
    pub async fn set_primary(
        pool: &PgPool,
        pet_id: DbId,
        image_id: DbId,
    ) -> Result<Option<PetImage>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "UPDATE pet_images SET is_primary = false
             WHERE pet_id = $1 AND is_primary = true",
        )
        .bind(pet_id)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "UPDATE pet_images SET is_primary = true
             WHERE id = $1 AND pet_id = $2
             RETURNING {COLUMNS}"
        );
        let image = sqlx::query_as::<_, PetImage>(&query)
            .bind(image_id)
            .bind(pet_id)
            .fetch_optional(&mut *tx)
            .await?;

        if image.is_some() {
            tx.commit().await?;
        }
        Ok(image)
    }

    /// Delete an image row by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pet_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
