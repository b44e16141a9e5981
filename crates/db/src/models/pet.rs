//! Pet entity and input DTO.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tailwag_core::types::{DbId, Timestamp};
use validator::Validate;

use super::serde_helpers::{blank_as_none, blank_date_as_none, trimmed};

/// A row from the `pets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pet {
    pub id: DbId,
    pub name: String,
    pub story: Option<String>,
    pub service_date: Option<NaiveDate>,
    pub is_house_pet: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `pet_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PetImage {
    pub id: DbId,
    pub pet_id: DbId,
    pub url: String,
    pub is_primary: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
}

/// Payload for creating a pet or replacing all of its fields.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PetInput {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Pet name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub story: Option<String>,
    #[serde(default, deserialize_with = "blank_date_as_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub is_house_pet: bool,
}

/// DTO for inserting a pet image row.
#[derive(Debug, Clone)]
pub struct CreatePetImage {
    pub pet_id: DbId,
    pub url: String,
    pub is_primary: Option<bool>,
    pub display_order: Option<i32>,
}
