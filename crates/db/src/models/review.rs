//! Customer review entity and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tailwag_core::types::{DbId, Timestamp};
use validator::Validate;

use super::serde_helpers::trimmed;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub customer_name: String,
    pub rating: i16,
    pub review_text: String,
    /// One of `pending`, `approved`, `rejected`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload posted by the public review form. Status is always `pending`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub customer_name: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i16,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Review text is required"))]
    pub review_text: String,
}

/// Admin moderation payload.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReviewStatus {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_review_text_fails_validation() {
        let review: CreateReview = serde_json::from_value(serde_json::json!({
            "customerName": " Dana ",
            "rating": 5,
            "reviewText": "   ",
        }))
        .unwrap();
        assert_eq!(review.customer_name, "Dana");
        assert!(review.validate().is_err());
    }
}
