use std::net::SocketAddr;
use std::sync::Arc;

use tailwag_api::auth::credentials::StaticCredentials;
use tailwag_api::config::{storage_settings_from_env, DatabaseConfig, ServerConfig};
use tailwag_api::router::build_app_router;
use tailwag_api::state::AppState;
use tailwag_storage::{MemoryStore, ObjectStore, S3Store};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    init_tracing();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let credentials = StaticCredentials::from_env();
    tracing::info!(?credentials, "Admin credentials loaded");

    // --- Database ---
    let db = DatabaseConfig::from_env();
    let pool = tailwag_db::create_pool(&db.url, db.max_connections, db.acquire_timeout)
        .await
        .expect("Failed to connect to database");
    tracing::info!(max_connections = db.max_connections, "Database connection pool created");

    tailwag_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    tailwag_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Object storage ---
    let store: Arc<dyn ObjectStore> = match storage_settings_from_env() {
        Some(settings) => {
            let store = S3Store::connect(&settings).await;
            tracing::info!(
                bucket = %settings.bucket,
                region = %settings.region,
                public_base_url = store.public_base_url(),
                "S3 image storage configured",
            );
            Arc::new(store)
        }
        None => {
            let base_url = format!("http://localhost:{}/uploads", config.port);
            tracing::warn!(
                %base_url,
                "S3_BUCKET not set; pet images are kept in memory, not served, and lost on restart",
            );
            Arc::new(MemoryStore::new(base_url))
        }
    };

    // --- App state ---
    let state = AppState {
        pool,
        store,
        credentials: Arc::new(credentials),
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, static_dir = %config.static_dir, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Install the global subscriber. `LOG_FORMAT=json` switches to one JSON
/// object per line for log shippers.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tailwag_api=debug,tower_http=debug".into());

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
