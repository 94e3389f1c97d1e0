use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_api=debug,catalog_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().unwrap_or_else(|e| fatal("Invalid configuration", e));
    tracing::info!(
        app_env = config.app_env.as_str(),
        host = %config.host,
        port = %config.port,
        "Loaded server configuration"
    );

    // --- Database ---
    let database_url = config.app_env.database_url();

    let pool = catalog_db::create_pool(&database_url)
        .await
        .unwrap_or_else(|e| fatal("Failed to open database", e));
    tracing::info!(database = config.app_env.database_file(), "Database connection pool created");

    catalog_db::run_migrations(&pool)
        .await
        .unwrap_or_else(|e| fatal("Failed to migrate the database schema", e));
    tracing::info!("Database migrations applied");

    // --- App state ---
    let addr = SocketAddr::new(
        config
            .host
            .parse()
            .unwrap_or_else(|e| fatal("Invalid HOST address", e)),
        config.port,
    );

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config),
    };

    let app = build_app_router(state);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| fatal("Failed to bind to address", e));

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
    }

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, closing database pool");
    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Log a startup failure and terminate the process.
fn fatal(context: &str, err: impl std::fmt::Display) -> ! {
    tracing::error!(error = %err, "{context}");
    std::process::exit(1);
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
