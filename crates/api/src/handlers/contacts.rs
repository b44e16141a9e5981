//! Handlers for contact inquiries.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tailwag_core::error::CoreError;
use tailwag_core::types::DbId;
use tailwag_db::models::contact::{Contact, CreateContact};
use tailwag_db::repositories::ContactRepo;

use crate::error::{validate_input, AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, SuccessResponse};
use crate::state::AppState;

/// POST /api/contact
///
/// Public inquiry form. Needs a name and an email or phone number.
pub async fn submit_contact(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateContact>,
) -> AppResult<(StatusCode, Json<DataResponse<Contact>>)> {
    validate_input(&input)?;

    let contact = ContactRepo::create(&state.pool, &input).await?;

    tracing::info!(contact_id = contact.id, "Contact inquiry received");

    Ok((StatusCode::CREATED, Json(DataResponse::new(contact))))
}

/// GET /api/contact
///
/// All inquiries, newest first.
pub async fn list_contacts(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Contact>>> {
    let contacts = ContactRepo::list_all(&state.pool).await?;
    Ok(Json(contacts))
}

/// DELETE /api/contact/{id}
pub async fn delete_contact(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(contact_id): ApiPath<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    if !ContactRepo::delete(&state.pool, contact_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id: contact_id,
        }));
    }

    tracing::info!(contact_id, admin = %admin.username, "Contact inquiry deleted");

    Ok(Json(SuccessResponse::ok()))
}
