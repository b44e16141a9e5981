//! Route definitions for the `/reviews` resource.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
///
/// ```text
/// GET    /              -> list_approved_reviews (public)
/// POST   /              -> submit_review (public)
/// PUT    /{id}/status   -> update_review_status (admin)
/// DELETE /{id}          -> delete_review (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(reviews::list_approved_reviews).post(reviews::submit_review),
        )
        .route("/{id}/status", put(reviews::update_review_status))
        .route("/{id}", delete(reviews::delete_review))
}
