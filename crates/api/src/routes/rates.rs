//! Route definitions for the `/rates` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::rates;
use crate::state::AppState;

/// Routes mounted at `/rates`.
///
/// ```text
/// GET    /                -> list_active_rates (public)
/// POST   /                -> create_rate (admin)
/// GET    /featured        -> get_featured_rate (public)
/// DELETE /featured        -> clear_featured_rate (admin)
/// PUT    /{id}            -> update_rate (admin)
/// DELETE /{id}            -> delete_rate (admin)
/// PUT    /{id}/featured   -> set_featured_rate (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(rates::list_active_rates).post(rates::create_rate),
        )
        .route(
            "/featured",
            get(rates::get_featured_rate).delete(rates::clear_featured_rate),
        )
        .route(
            "/{id}",
            put(rates::update_rate).delete(rates::delete_rate),
        )
        .route("/{id}/featured", put(rates::set_featured_rate))
}
