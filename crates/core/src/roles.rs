//! Well-known role name constants.
//!
//! There is a single administrator account; the role is embedded in every
//! issued access token so the extractor can reject anything else.

pub const ROLE_ADMIN: &str = "admin";
