//! Contact inquiry entity and submission DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tailwag_core::types::{DbId, Timestamp};
use validator::{Validate, ValidationError};

use super::serde_helpers::{blank_as_none, trimmed};

/// A row from the `contacts` table. Inquiries are never updated.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub best_time: Option<String>,
    pub service: Option<String>,
    pub pet_info: Option<String>,
    pub dates: Option<String>,
    pub message: Option<String>,
    pub created_at: Timestamp,
}

/// Payload posted by the public contact form.
///
/// At least one of `email` or `phone` must be present.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_contact_method"))]
pub struct CreateContact {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(email(message = "Email address is not valid"))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub best_time: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub service: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub pet_info: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub dates: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub message: Option<String>,
}

fn validate_contact_method(contact: &CreateContact) -> Result<(), ValidationError> {
    if contact.email.is_none() && contact.phone.is_none() {
        let mut err = ValidationError::new("contact_method");
        err.message = Some("Please provide an email address or a phone number".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: serde_json::Value) -> CreateContact {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn phone_only_is_valid() {
        let contact = parse(serde_json::json!({ "name": "Ann", "email": "", "phone": "555-0101" }));
        assert_eq!(contact.email, None);
        assert!(contact.validate().is_ok());
    }

    #[test]
    fn neither_email_nor_phone_is_rejected() {
        let contact = parse(serde_json::json!({ "name": "Ann", "message": "Hi" }));
        let err = contact.validate().unwrap_err();
        assert!(err.to_string().contains("email address or a phone number"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let contact = parse(serde_json::json!({ "name": "Ann", "email": "not-an-email" }));
        assert!(contact.validate().is_err());
    }

    #[test]
    fn camel_case_fields_are_read() {
        let contact = parse(serde_json::json!({
            "name": "Ann",
            "email": "ann@example.com",
            "bestTime": "Evenings",
            "petInfo": "Two cats",
        }));
        assert_eq!(contact.best_time.as_deref(), Some("Evenings"));
        assert_eq!(contact.pet_info.as_deref(), Some("Two cats"));
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let contact = parse(serde_json::json!({ "name": " \t ", "phone": "555-0101" }));
        assert!(contact.validate().is_err());
    }
}
