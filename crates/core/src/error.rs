//! Domain errors shared by repositories, services and the HTTP layer.

use crate::types::DbId;

/// Index enforcing that at most one rate carries the featured flag.
pub const FEATURED_RATE_INDEX: &str = "uq_rates_single_featured";

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A pet, image, rate, contact or review id with no row behind it.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input rejected before it reaches the database.
    #[error("{0}")]
    Validation(String),

    /// A write that would break a uniqueness rule.
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    /// Stored data the server cannot interpret, e.g. an image URL outside the bucket.
    #[error("{0}")]
    Internal(String),
}

impl CoreError {
    /// Conflict raised by a unique index or constraint named `constraint`.
    pub fn unique_violation(constraint: &str) -> Self {
        let message = if constraint == FEATURED_RATE_INDEX {
            "Only one rate can be featured at a time".to_string()
        } else {
            format!("Duplicate value violates unique constraint: {constraint}")
        };
        CoreError::Conflict(message)
    }

    /// Stable machine-readable code sent alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::NotFound { .. } => "NOT_FOUND",
            CoreError::Validation(_) => "VALIDATION_ERROR",
            CoreError::Conflict(_) => "CONFLICT",
            CoreError::Unauthorized(_) => "UNAUTHORIZED",
            CoreError::Forbidden(_) => "FORBIDDEN",
            CoreError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
