//! Pet image lifecycle: upload, delete, and cascade on pet deletion.

use futures::future::join_all;
use tailwag_core::error::CoreError;
use tailwag_core::image::validate_image_upload;
use tailwag_core::storage::{key_from_url, new_pet_image_key, public_url};
use tailwag_core::types::DbId;
use tailwag_db::models::pet::{CreatePetImage, PetImage};
use tailwag_db::repositories::{PetImageRepo, PetRepo};
use tailwag_db::DbPool;
use tailwag_storage::ObjectStore;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Borrowed view over the two stores a gallery mutation touches.
pub struct GalleryService<'a> {
    pool: &'a DbPool,
    store: &'a dyn ObjectStore,
}

impl<'a> GalleryService<'a> {
    pub fn new(pool: &'a DbPool, store: &'a dyn ObjectStore) -> Self {
        Self { pool, store }
    }

    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(&state.pool, state.store.as_ref())
    }

    /// Upload an image for `pet_id` and record it.
    ///
    /// The pet is checked before anything is uploaded. If the row insert
    /// fails after the upload succeeded, the object is deleted again and the
    /// insert error is returned. A pet deleted between the check and the
    /// insert is reported as not found.
    pub async fn add_image(&self, pet_id: DbId, bytes: Vec<u8>) -> AppResult<PetImage> {
        PetRepo::find_by_id(self.pool, pet_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Pet",
                id: pet_id,
            })?;

        let kind = validate_image_upload(&bytes)?;
        let key = new_pet_image_key(kind);
        let size = bytes.len();
        self.store.put(&key, bytes, kind.mime()).await?;

        let url = public_url(self.store.public_base_url(), &key);
        let input = CreatePetImage {
            pet_id,
            url,
            is_primary: Some(false),
            display_order: Some(0),
        };

        match PetImageRepo::create(self.pool, &input).await {
            Ok(image) => {
                tracing::info!(pet_id, image_id = image.id, key = %key, size, "Pet image uploaded");
                Ok(image)
            }
            Err(err) => {
                if let Err(cleanup) = self.store.delete(&key).await {
                    tracing::error!(
                        pet_id,
                        key = %key,
                        error = %cleanup,
                        "Failed to remove orphaned upload",
                    );
                } else {
                    tracing::warn!(pet_id, key = %key, "Removed upload after failed image insert");
                }
                Err(pet_gone_or(err, pet_id))
            }
        }
    }

    /// Delete one image of a pet: the stored object first, then the row.
    ///
    /// A missing image (or one owned by another pet) is a 404 and never
    /// reaches the object store.
    pub async fn delete_image(&self, pet_id: DbId, image_id: DbId) -> AppResult<()> {
        let image = PetImageRepo::find_for_pet(self.pool, pet_id, image_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "PetImage",
                id: image_id,
            })?;

        let key = key_from_url(&image.url, self.store.public_base_url())?;
        self.store.delete(&key).await?;

        if !PetImageRepo::delete(self.pool, image.id).await? {
            return Err(CoreError::NotFound {
                entity: "PetImage",
                id: image_id,
            }
            .into());
        }

        tracing::info!(pet_id, image_id, key = %key, "Pet image deleted");
        Ok(())
    }

    /// Delete a pet with all of its image rows, then their stored objects.
    ///
    /// Rows go in one transaction. Object removal happens after the commit;
    /// failures there are logged and do not fail the request. Returns the
    /// number of images removed.
    pub async fn delete_pet(&self, pet_id: DbId) -> AppResult<usize> {
        let urls = PetRepo::delete_with_images(self.pool, pet_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Pet",
                id: pet_id,
            })?;

        let base = self.store.public_base_url();
        let removals = urls.iter().map(|url| async move {
            let key = key_from_url(url, base).map_err(|e| e.to_string())?;
            self.store.delete(&key).await.map_err(|e| e.to_string())
        });

        for (url, outcome) in urls.iter().zip(join_all(removals).await) {
            if let Err(error) = outcome {
                tracing::warn!(pet_id, url = %url, error = %error, "Orphaned pet image object");
            }
        }

        tracing::info!(pet_id, image_count = urls.len(), "Pet deleted");
        Ok(urls.len())
    }
}

/// Map a foreign-key violation on `pet_images.pet_id` to a missing pet.
fn pet_gone_or(err: sqlx::Error, pet_id: DbId) -> AppError {
    let pet_gone = err
        .as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation());
    if pet_gone {
        CoreError::NotFound {
            entity: "Pet",
            id: pet_id,
        }
        .into()
    } else {
        err.into()
    }
}
