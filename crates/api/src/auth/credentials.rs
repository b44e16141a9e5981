//! Admin credential check.
//!
//! `/admin/auth` only needs a yes/no answer for a username and password, so
//! the check sits behind [`CredentialVerifier`] and the router never sees
//! where credentials come from.

use crate::auth::password::verify_password;

/// Decides whether a username/password pair belongs to the site admin.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single admin account configured at startup.
///
/// The password is held only as an Argon2id PHC hash (see the
/// `hash-password` binary).
#[derive(Clone)]
pub struct StaticCredentials {
    username: String,
    password_hash: String,
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Load the admin account from the environment.
    ///
    /// | Env Var               | Required |
    /// |-----------------------|----------|
    /// | `ADMIN_USERNAME`      | **yes**  |
    /// | `ADMIN_PASSWORD_HASH` | **yes**  |
    ///
    /// # Panics
    ///
    /// Panics if either variable is missing or the hash is not a valid PHC
    /// string, so a broken deployment fails at startup rather than at login.
    pub fn from_env() -> Self {
        let username =
            std::env::var("ADMIN_USERNAME").expect("ADMIN_USERNAME must be set in the environment");
        let password_hash = std::env::var("ADMIN_PASSWORD_HASH")
            .expect("ADMIN_PASSWORD_HASH must be set in the environment");
        assert!(!username.trim().is_empty(), "ADMIN_USERNAME must not be empty");
        argon2::password_hash::PasswordHash::new(&password_hash)
            .expect("ADMIN_PASSWORD_HASH must be an Argon2 PHC string");
        Self::new(username, password_hash)
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        if username != self.username {
            return false;
        }
        match verify_password(password, &self.password_hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!(error = %e, "Stored admin password hash is unusable");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::hash_password;

    fn admin() -> StaticCredentials {
        StaticCredentials::new("sitter", hash_password("walkies").unwrap())
    }

    #[test]
    fn accepts_matching_pair() {
        assert!(admin().verify("sitter", "walkies"));
    }

    #[test]
    fn rejects_wrong_password() {
        assert!(!admin().verify("sitter", "treats"));
    }

    #[test]
    fn rejects_wrong_username() {
        assert!(!admin().verify("intruder", "walkies"));
    }

    #[test]
    fn broken_hash_rejects_instead_of_panicking() {
        let creds = StaticCredentials::new("sitter", "not-a-phc-string");
        assert!(!creds.verify("sitter", "walkies"));
    }

    #[test]
    fn debug_output_hides_hash() {
        let rendered = format!("{:?}", admin());
        assert!(rendered.contains("sitter"));
        assert!(!rendered.contains("argon2"));
    }
}
