//! Handlers for rates and the exclusive featured rate.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tailwag_core::error::CoreError;
use tailwag_core::types::DbId;
use tailwag_db::models::rate::{Rate, RateInput};
use tailwag_db::repositories::RateRepo;

use crate::error::{validate_input, AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, SuccessResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Rate", id })
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/rates
///
/// Active rates in creation order.
pub async fn list_active_rates(State(state): State<AppState>) -> AppResult<Json<Vec<Rate>>> {
    let rates = RateRepo::list_active(&state.pool).await?;
    Ok(Json(rates))
}

/// GET /api/rates/featured
///
/// The featured rate, or `null` when none is featured.
pub async fn get_featured_rate(State(state): State<AppState>) -> AppResult<Json<Option<Rate>>> {
    let rate = RateRepo::find_featured(&state.pool).await?;
    Ok(Json(rate))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/admin/rates
///
/// Every rate, active or not.
pub async fn list_all_rates(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Rate>>> {
    let rates = RateRepo::list_all(&state.pool).await?;
    Ok(Json(rates))
}

/// POST /api/rates
pub async fn create_rate(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RateInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Rate>>)> {
    validate_input(&input)?;

    let rate = RateRepo::create(&state.pool, &input).await?;

    tracing::info!(rate_id = rate.id, admin = %admin.username, "Rate created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(rate))))
}

/// PUT /api/rates/{id}
///
/// Full replace of the editable fields; the featured flag is kept.
pub async fn update_rate(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(rate_id): ApiPath<DbId>,
    ApiJson(input): ApiJson<RateInput>,
) -> AppResult<Json<DataResponse<Rate>>> {
    validate_input(&input)?;

    let rate = RateRepo::update(&state.pool, rate_id, &input)
        .await?
        .ok_or_else(|| not_found(rate_id))?;

    tracing::info!(rate_id, admin = %admin.username, "Rate updated");

    Ok(Json(DataResponse::new(rate)))
}

/// DELETE /api/rates/{id}
pub async fn delete_rate(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(rate_id): ApiPath<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    if !RateRepo::delete(&state.pool, rate_id).await? {
        return Err(not_found(rate_id));
    }

    tracing::info!(rate_id, admin = %admin.username, "Rate deleted");

    Ok(Json(SuccessResponse::ok()))
}

/// PUT /api/rates/{id}/featured
///
/// Make this rate the only featured one.
pub async fn set_featured_rate(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(rate_id): ApiPath<DbId>,
) -> AppResult<Json<DataResponse<Rate>>> {
    let rate = RateRepo::set_featured(&state.pool, rate_id)
        .await?
        .ok_or_else(|| not_found(rate_id))?;

    tracing::info!(rate_id, admin = %admin.username, "Featured rate set");

    Ok(Json(DataResponse::new(rate)))
}

/// DELETE /api/rates/featured
pub async fn clear_featured_rate(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<SuccessResponse>> {
    let cleared = RateRepo::clear_featured(&state.pool).await?;

    tracing::info!(cleared, admin = %admin.username, "Featured rate cleared");

    Ok(Json(SuccessResponse::ok()))
}
