//! Admin handlers for pets and their images.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tailwag_core::error::CoreError;
use tailwag_core::types::DbId;
use tailwag_db::models::pet::{Pet, PetImage, PetInput};
use tailwag_db::repositories::{PetImageRepo, PetRepo};

use crate::error::{validate_input, AppError, AppResult};
use crate::extract::{ApiJson, ApiMultipart, ApiPath};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, SuccessResponse, UploadResponse};
use crate::services::gallery::GalleryService;
use crate::state::AppState;

/// Multipart field carrying the uploaded file.
const IMAGE_FIELD: &str = "image";

/// POST /api/pets
pub async fn create_pet(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<PetInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Pet>>)> {
    validate_input(&input)?;

    let pet = PetRepo::create(&state.pool, &input).await?;

    tracing::info!(pet_id = pet.id, admin = %admin.username, "Pet created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(pet))))
}

/// PUT /api/pets/{id}
///
/// Replace every editable field of a pet.
pub async fn update_pet(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(pet_id): ApiPath<DbId>,
    ApiJson(input): ApiJson<PetInput>,
) -> AppResult<Json<DataResponse<Pet>>> {
    validate_input(&input)?;

    let pet = PetRepo::update(&state.pool, pet_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Pet",
            id: pet_id,
        }))?;

    tracing::info!(pet_id, admin = %admin.username, "Pet updated");

    Ok(Json(DataResponse::new(pet)))
}

/// DELETE /api/pets/{id}
///
/// Delete the pet, its image rows, and their stored objects.
pub async fn delete_pet(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(pet_id): ApiPath<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    let removed = GalleryService::from_state(&state).delete_pet(pet_id).await?;

    tracing::debug!(pet_id, removed, admin = %admin.username, "Pet delete finished");

    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/pets/{id}/images
///
/// Multipart upload; the file must be in the `image` field.
pub async fn upload_image(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(pet_id): ApiPath<DbId>,
    ApiMultipart(mut multipart): ApiMultipart,
) -> AppResult<(StatusCode, Json<UploadResponse<PetImage>>)> {
    let mut upload: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        tracing::debug!(
            pet_id,
            file_name = field.file_name().unwrap_or("unknown"),
            declared_type = field.content_type().unwrap_or("unknown"),
            "Receiving pet image",
        );
        upload = Some(field.bytes().await?.to_vec());
        break;
    }

    let bytes = upload.ok_or_else(|| AppError::BadRequest("No image file provided".into()))?;

    let image = GalleryService::from_state(&state)
        .add_image(pet_id, bytes)
        .await?;

    tracing::info!(pet_id, image_id = image.id, admin = %admin.username, "Pet image added");

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            success: true,
            url: image.url.clone(),
            data: image,
        }),
    ))
}

/// PUT /api/pets/{id}/images/{image_id}/primary
pub async fn set_primary_image(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath((pet_id, image_id)): ApiPath<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<PetImage>>> {
    let image = PetImageRepo::set_primary(&state.pool, pet_id, image_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PetImage",
            id: image_id,
        }))?;

    tracing::info!(pet_id, image_id, admin = %admin.username, "Primary pet image set");

    Ok(Json(DataResponse::new(image)))
}

/// DELETE /api/pets/{id}/images/{image_id}
pub async fn delete_image(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath((pet_id, image_id)): ApiPath<(DbId, DbId)>,
) -> AppResult<Json<SuccessResponse>> {
    GalleryService::from_state(&state)
        .delete_image(pet_id, image_id)
        .await?;

    tracing::debug!(pet_id, image_id, admin = %admin.username, "Pet image delete finished");

    Ok(Json(SuccessResponse::ok()))
}
