//! Route definitions for the `/contact` resource.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::contacts;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// POST   /       -> submit_contact (public)
/// GET    /       -> list_contacts (admin)
/// DELETE /{id}   -> delete_contact (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(contacts::submit_contact).get(contacts::list_contacts),
        )
        .route("/{id}", delete(contacts::delete_contact))
}
