pub mod admin;
pub mod contacts;
pub mod gallery;
pub mod health;
pub mod pets;
pub mod rates;
pub mod reviews;

use axum::http::Uri;
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /admin/auth                                  sign in (public)
/// /admin/rates                                 all rates (admin)
/// /admin/reviews                               all reviews (admin)
///
/// /gallery                                     pets with images (public)
/// /gallery/{id}                                single pet (public)
///
/// /pets                                        create (admin)
/// /pets/{id}                                   update, delete (admin)
/// /pets/{id}/images                            upload (admin)
/// /pets/{id}/images/{image_id}                 delete (admin)
/// /pets/{id}/images/{image_id}/primary         make primary (admin)
///
/// /rates                                       active list (public), create (admin)
/// /rates/featured                              get (public), clear (admin)
/// /rates/{id}                                  update, delete (admin)
/// /rates/{id}/featured                         set featured (admin)
///
/// /contact                                     submit (public), list (admin)
/// /contact/{id}                                delete (admin)
///
/// /reviews                                     approved list, submit (public)
/// /reviews/{id}                                delete (admin)
/// /reviews/{id}/status                         moderate (admin)
/// ```
///
/// Anything else under `/api` is a JSON 404 rather than the front-end's
/// `index.html`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/admin", admin::router())
        .nest("/gallery", gallery::router())
        .nest("/pets", pets::router())
        .nest("/rates", rates::router())
        .nest("/contact", contacts::router())
        .nest("/reviews", reviews::router())
        .fallback(api_not_found)
}

async fn api_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No API route for {}", uri.path()))
}
