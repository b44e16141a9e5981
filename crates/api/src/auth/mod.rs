//! Authentication primitives for the single admin account.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation and validation.
//! - [`credentials`] -- Pluggable username/password check behind `/admin/auth`.

pub mod credentials;
pub mod jwt;
pub mod password;
