//! Repository for the `pets` table and the gallery read model.

use sqlx::PgPool;
use tailwag_core::types::DbId;

use crate::models::gallery::{assemble_gallery, GalleryPet, GalleryRow};
use crate::models::pet::{Pet, PetInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, story, service_date, is_house_pet, created_at, updated_at";

/// Select list for the pets/images left join. Image columns are aliased so
/// they do not collide with the pet's own `id` and `created_at`.
const GALLERY_SELECT: &str = "\
    SELECT p.id, p.name, p.story, p.service_date, p.is_house_pet, \
           p.created_at, p.updated_at, \
           i.id AS image_id, i.url AS image_url, i.is_primary AS image_is_primary, \
           i.display_order AS image_display_order, i.created_at AS image_created_at \
    FROM pets p \
    LEFT JOIN pet_images i ON i.pet_id = p.id";

/// Provides CRUD operations for pets and the aggregated gallery.
pub struct PetRepo;

impl PetRepo {
    /// Insert a new pet, returning the created row.
    pub async fn create(pool: &PgPool, input: &PetInput) -> Result<Pet, sqlx::Error> {
        let query = format!(
            "INSERT INTO pets (name, story, service_date, is_house_pet)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(&input.name)
            .bind(&input.story)
            .bind(input.date)
            .bind(input.is_house_pet)
            .fetch_one(pool)
            .await
    }

    /// Find a pet by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pets WHERE id = $1");
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace every editable field of a pet.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PetInput,
    ) -> Result<Option<Pet>, sqlx::Error> {
        let query = format!(
            "UPDATE pets SET
                name = $2,
                story = $3,
                service_date = $4,
                is_house_pet = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pet>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.story)
            .bind(input.date)
            .bind(input.is_house_pet)
            .fetch_optional(pool)
            .await
    }

    /// Load the whole gallery, newest pet first, each with its images.
    ///
    /// `house_pets` restricts the result to house pets (`Some(true)`) or
    /// client pets (`Some(false)`).
    pub async fn gallery(
        pool: &PgPool,
        house_pets: Option<bool>,
    ) -> Result<Vec<GalleryPet>, sqlx::Error> {
        let query = format!(
            "{GALLERY_SELECT}
             WHERE ($1::BOOLEAN IS NULL OR p.is_house_pet = $1)
             ORDER BY p.created_at DESC, p.id DESC, i.display_order ASC, i.id ASC"
        );
        let rows = sqlx::query_as::<_, GalleryRow>(&query)
            .bind(house_pets)
            .fetch_all(pool)
            .await?;
        Ok(assemble_gallery(rows))
    }

    /// Load a single gallery entry, or `None` if the pet does not exist.
    pub async fn gallery_entry(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GalleryPet>, sqlx::Error> {
        let query = format!(
            "{GALLERY_SELECT}
             WHERE p.id = $1
             ORDER BY i.display_order ASC, i.id ASC"
        );
        let rows = sqlx::query_as::<_, GalleryRow>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;
        Ok(assemble_gallery(rows).into_iter().next())
    }

    /// Delete a pet and all of its image rows in one transaction.
    ///
    /// Returns the URLs of the deleted images so the caller can remove the
    /// stored objects, or `None` if the pet does not exist (nothing deleted).
    pub async fn delete_with_images(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Vec<String>>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: Option<DbId> = sqlx::query_scalar("SELECT id FROM pets WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let urls: Vec<String> =
            sqlx::query_scalar("DELETE FROM pet_images WHERE pet_id = $1 RETURNING url")
                .bind(id)
                .fetch_all(&mut *tx)
                .await?;

        sqlx::query("DELETE FROM pets WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(urls))
    }
}
