//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` input DTO for inserts and full replaces
//!
//! Rows serialize with snake_case keys. Input DTOs accept the camelCase keys
//! the site's forms post.

pub mod contact;
pub mod gallery;
pub mod pet;
pub mod rate;
pub mod review;
pub mod serde_helpers;
