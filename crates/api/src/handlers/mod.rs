//! Request handlers, one submodule per resource.
//!
//! Handlers delegate to the repositories in `tailwag_db` (or to
//! [`crate::services`] when object storage is involved) and map errors via
//! [`crate::error::AppError`].

pub mod auth;
pub mod contacts;
pub mod gallery;
pub mod pets;
pub mod rates;
pub mod reviews;
