//! Review moderation status constants and validation.
//!
//! Submitted reviews start as `pending`; only `approved` ones are listed
//! publicly. These values must match the `reviews.status` check constraint.

use crate::error::CoreError;

pub const REVIEW_PENDING: &str = "pending";
pub const REVIEW_APPROVED: &str = "approved";
pub const REVIEW_REJECTED: &str = "rejected";

/// Lowest accepted star rating.
pub const MIN_RATING: i16 = 1;
/// Highest accepted star rating.
pub const MAX_RATING: i16 = 5;

const VALID_STATUSES: &[&str] = &[REVIEW_PENDING, REVIEW_APPROVED, REVIEW_REJECTED];

/// Validate that `status` is one of the known moderation states.
pub fn validate_review_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid review status '{status}'. Must be one of: {VALID_STATUSES:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_pass() {
        for status in VALID_STATUSES {
            assert!(validate_review_status(status).is_ok());
        }
    }

    #[test]
    fn unknown_status_fails() {
        let err = validate_review_status("published").unwrap_err();
        assert!(err.to_string().contains("published"));
    }
}
