//! Handlers for customer reviews and their moderation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tailwag_core::error::CoreError;
use tailwag_core::review::validate_review_status;
use tailwag_core::types::DbId;
use tailwag_db::models::review::{CreateReview, Review, UpdateReviewStatus};
use tailwag_db::repositories::ReviewRepo;

use crate::error::{validate_input, AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, SuccessResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Review",
        id,
    })
}

/// POST /api/reviews
///
/// Public submission. Stored as `pending` until an admin approves it.
pub async fn submit_review(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateReview>,
) -> AppResult<(StatusCode, Json<DataResponse<Review>>)> {
    validate_input(&input)?;

    let review = ReviewRepo::create(&state.pool, &input).await?;

    tracing::info!(review_id = review.id, rating = review.rating, "Review submitted");

    Ok((StatusCode::CREATED, Json(DataResponse::new(review))))
}

/// GET /api/reviews
///
/// Approved reviews only, newest first.
pub async fn list_approved_reviews(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Review>>> {
    let reviews = ReviewRepo::list_approved(&state.pool).await?;
    Ok(Json(reviews))
}

/// GET /api/admin/reviews
///
/// Every review regardless of status, newest first.
pub async fn list_all_reviews(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Review>>> {
    let reviews = ReviewRepo::list_all(&state.pool).await?;
    Ok(Json(reviews))
}

/// PUT /api/reviews/{id}/status
pub async fn update_review_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(review_id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateReviewStatus>,
) -> AppResult<Json<DataResponse<Review>>> {
    validate_review_status(&input.status)?;

    let review = ReviewRepo::update_status(&state.pool, review_id, &input.status)
        .await?
        .ok_or_else(|| not_found(review_id))?;

    tracing::info!(
        review_id,
        status = %review.status,
        admin = %admin.username,
        "Review moderated",
    );

    Ok(Json(DataResponse::new(review)))
}

/// DELETE /api/reviews/{id}
pub async fn delete_review(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(review_id): ApiPath<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    if !ReviewRepo::delete(&state.pool, review_id).await? {
        return Err(not_found(review_id));
    }

    tracing::info!(review_id, admin = %admin.username, "Review deleted");

    Ok(Json(SuccessResponse::ok()))
}
