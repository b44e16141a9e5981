//! Public gallery reads.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tailwag_core::error::CoreError;
use tailwag_core::types::DbId;
use tailwag_db::models::gallery::GalleryPet;
use tailwag_db::repositories::PetRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery};
use crate::state::AppState;

/// Query parameters for `GET /gallery`.
#[derive(Debug, Default, Deserialize)]
pub struct GalleryParams {
    /// `true` for house pets only, `false` for client pets only.
    pub house_pets: Option<bool>,
}

/// GET /api/gallery
///
/// Every pet, newest first, each with its ordered images and preview URL.
pub async fn list_gallery(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<GalleryParams>,
) -> AppResult<Json<Vec<GalleryPet>>> {
    let gallery = PetRepo::gallery(&state.pool, params.house_pets).await?;
    Ok(Json(gallery))
}

/// GET /api/gallery/{id}
pub async fn get_gallery_entry(
    State(state): State<AppState>,
    ApiPath(pet_id): ApiPath<DbId>,
) -> AppResult<Json<GalleryPet>> {
    let entry = PetRepo::gallery_entry(&state.pool, pet_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Pet",
            id: pet_id,
        }))?;
    Ok(Json(entry))
}
