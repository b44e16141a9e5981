use std::str::FromStr;
use std::time::Duration;

use tailwag_storage::S3Settings;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum accepted request body, uploads included (default: 10 MiB).
    pub max_upload_bytes: usize,
    /// Directory holding the built front-end (default: `public`).
    pub static_dir: String,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                 |
    /// | `STATIC_DIR`           | `public`                   |
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    /// Same as [`ServerConfig::from_env`] but reading from an arbitrary source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 3000u16);

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64);
        let max_upload_bytes = parse_or(&lookup, "MAX_UPLOAD_BYTES", 10 * 1024 * 1024usize);
        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| "public".into());
        let jwt = JwtConfig::from_lookup(&lookup);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
            static_dir,
            jwt,
        }
    }
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// | Env Var                   | Required | Default |
    /// |---------------------------|----------|---------|
    /// | `DATABASE_URL`            | **yes**  | --      |
    /// | `DB_MAX_CONNECTIONS`      | no       | `10`    |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | no       | `5`     |
    ///
    /// # Panics
    ///
    /// Panics if `DATABASE_URL` is not set.
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let url = lookup("DATABASE_URL").expect("DATABASE_URL must be set");
        Self {
            url,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10u32),
            acquire_timeout: Duration::from_secs(parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5u64)),
        }
    }
}

/// S3 settings, or `None` when `S3_BUCKET` is unset (images then live in
/// process memory, which is only suitable for local development).
///
/// | Env Var                     | Default                                  |
/// |-----------------------------|------------------------------------------|
/// | `S3_BUCKET`                 | unset                                    |
/// | `S3_REGION`                 | `us-east-1`                              |
/// | `S3_ENDPOINT_URL`           | unset                                    |
/// | `S3_PUBLIC_BASE_URL`        | derived from bucket/region or endpoint   |
/// | `S3_OPERATION_TIMEOUT_SECS` | `20`                                     |
pub fn storage_settings_from_env() -> Option<S3Settings> {
    storage_settings_from_lookup(env_lookup)
}

pub fn storage_settings_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<S3Settings> {
    let bucket = lookup("S3_BUCKET").filter(|b| !b.trim().is_empty())?;
    Some(S3Settings {
        bucket,
        region: lookup("S3_REGION").unwrap_or_else(|| "us-east-1".into()),
        endpoint_url: lookup("S3_ENDPOINT_URL").filter(|s| !s.is_empty()),
        public_base_url: lookup("S3_PUBLIC_BASE_URL").filter(|s| !s.is_empty()),
        operation_timeout: Duration::from_secs(parse_or(&lookup, "S3_OPERATION_TIMEOUT_SECS", 20u64)),
    })
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse `key` if present, else fall back to `default`.
///
/// # Panics
///
/// Panics with the variable name if the value is present but malformed, so
/// misconfiguration fails fast at startup.
pub(crate) fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|_| panic!("{key} must be a valid {}", std::any::type_name::<T>())),
        None => default,
    }
}
