use std::sync::Arc;

use tailwag_storage::ObjectStore;

use crate::auth::credentials::CredentialVerifier;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is a pool handle or behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tailwag_db::DbPool,
    /// Bucket holding pet images (S3 in production, in-memory otherwise).
    pub store: Arc<dyn ObjectStore>,
    /// Admin username/password check used by `/admin/auth`.
    pub credentials: Arc<dyn CredentialVerifier>,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
}
