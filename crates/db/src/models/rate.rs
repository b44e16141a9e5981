//! Rate (priced service offering) entity and input DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tailwag_core::types::{DbId, Timestamp};
use validator::Validate;

use super::serde_helpers::{blank_as_none, trimmed};

/// A row from the `rates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rate {
    pub id: DbId,
    pub service_name: String,
    pub price: f64,
    pub unit_type: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for creating a rate or replacing its editable fields.
///
/// `is_featured` is deliberately absent: it only changes through the
/// exclusive featured endpoints.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RateInput {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Service name is required"))]
    pub service_name: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Unit type is required"))]
    pub unit_type: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
