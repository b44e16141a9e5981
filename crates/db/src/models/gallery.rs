//! Gallery aggregation: pets with their nested images.
//!
//! The gallery is read with a single `pets LEFT JOIN pet_images` query, which
//! yields one flat [`GalleryRow`] per (pet, image) pair and exactly one row
//! with null image columns for a pet that has no images. [`assemble_gallery`]
//! folds those rows back into one [`GalleryPet`] per pet.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use tailwag_core::types::{DbId, Timestamp};

use super::pet::{Pet, PetImage};

/// One row of the pets/images left join. Image columns are null when the
/// pet has no images.
#[derive(Debug, Clone, FromRow)]
pub struct GalleryRow {
    pub id: DbId,
    pub name: String,
    pub story: Option<String>,
    pub service_date: Option<NaiveDate>,
    pub is_house_pet: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub image_id: Option<DbId>,
    pub image_url: Option<String>,
    pub image_is_primary: Option<bool>,
    pub image_display_order: Option<i32>,
    pub image_created_at: Option<Timestamp>,
}

impl GalleryRow {
    fn pet(&self) -> Pet {
        Pet {
            id: self.id,
            name: self.name.clone(),
            story: self.story.clone(),
            service_date: self.service_date,
            is_house_pet: self.is_house_pet,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn into_image(self) -> Option<PetImage> {
        Some(PetImage {
            id: self.image_id?,
            pet_id: self.id,
            url: self.image_url?,
            is_primary: self.image_is_primary.unwrap_or(false),
            display_order: self.image_display_order.unwrap_or(0),
            created_at: self.image_created_at?,
        })
    }
}

/// A pet together with its images, as served by `GET /gallery`.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryPet {
    #[serde(flatten)]
    pub pet: Pet,
    /// URL of the primary image, else the first image, else `None`.
    pub preview_url: Option<String>,
    /// Images ordered by `display_order`, then id.
    pub images: Vec<PetImage>,
}

/// Group flat join rows into gallery entries.
///
/// Pets keep the order in which they first appear in `rows`; images within a
/// pet are sorted by `(display_order, id)` regardless of row order.
pub fn assemble_gallery(rows: Vec<GalleryRow>) -> Vec<GalleryPet> {
    let mut entries: Vec<GalleryPet> = Vec::new();
    let mut index: HashMap<DbId, usize> = HashMap::new();

    for row in rows {
        let slot = *index.entry(row.id).or_insert_with(|| {
            entries.push(GalleryPet {
                pet: row.pet(),
                preview_url: None,
                images: Vec::new(),
            });
            entries.len() - 1
        });
        if let Some(image) = row.into_image() {
            entries[slot].images.push(image);
        }
    }

    for entry in &mut entries {
        entry.images.sort_by_key(|img| (img.display_order, img.id));
        entry.preview_url = entry
            .images
            .iter()
            .find(|img| img.is_primary)
            .or_else(|| entry.images.first())
            .map(|img| img.url.clone());
    }

    entries
}
