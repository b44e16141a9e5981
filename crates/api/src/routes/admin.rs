//! Route definitions for the `/admin` prefix.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, rates, reviews};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST /auth       -> login (public; issues the bearer token)
/// GET  /rates      -> list_all_rates (admin)
/// GET  /reviews    -> list_all_reviews (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth", post(auth::login))
        .route("/rates", get(rates::list_all_rates))
        .route("/reviews", get(reviews::list_all_reviews))
}
