//! Shared response envelope types for API handlers.
//!
//! Reads return the bare value. Writes use `{ "success": true, ... }` so the
//! admin front-end can branch on a single flag; errors carry
//! `"success": false` (see [`crate::error::AppError`]).

use serde::Serialize;

/// `{ "success": true, "data": T }` envelope for create/update results.
///
/// # Example
///
/// ```ignore
/// Ok((StatusCode::CREATED, Json(DataResponse::new(pet))))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Returned by uploads: the public URL alongside the stored row.
#[derive(Debug, Serialize)]
pub struct UploadResponse<T: Serialize> {
    pub success: bool,
    pub url: String,
    pub data: T,
}

/// Returned by `/admin/auth`.
#[derive(Debug, Serialize)]
pub struct AuthTokenResponse {
    pub success: bool,
    pub token: String,
}

/// Bare `{ "success": true }` for deletes and flag changes with no payload.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
