//! Route definitions for the `/pets` resource.

use axum::routing::{delete, post, put};
use axum::Router;

use crate::handlers::pets;
use crate::state::AppState;

/// Routes mounted at `/pets`. All require the admin role.
///
/// ```text
/// POST   /                                 -> create_pet
/// PUT    /{id}                             -> update_pet
/// DELETE /{id}                             -> delete_pet
/// POST   /{id}/images                      -> upload_image (multipart `image`)
/// PUT    /{id}/images/{image_id}/primary   -> set_primary_image
/// DELETE /{id}/images/{image_id}           -> delete_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(pets::create_pet))
        .route("/{id}", put(pets::update_pet).delete(pets::delete_pet))
        .route("/{id}/images", post(pets::upload_image))
        .route(
            "/{id}/images/{image_id}/primary",
            put(pets::set_primary_image),
        )
        .route("/{id}/images/{image_id}", delete(pets::delete_image))
}
