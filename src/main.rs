//! Title Search - cached text search over a small item catalog
//!
//! Binary entry point: logging, configuration, catalog seeding, and the
//! HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use title_search::api::create_router;
use title_search::cache::SharedCache;
use title_search::catalog::{Catalog, SharedCatalog};
use title_search::{spawn_cleanup_task, AppState, Config};

/// Main entry point for the search server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Seed the catalog from `CATALOG_PATH`, if set
/// 4. Create the query cache and start the expired entry sweep
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "title_search=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Title Search server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, autocomplete_limit={}, port={}, cleanup_interval={}s",
        config.cache_ttl, config.autocomplete_limit, config.server_port, config.cleanup_interval
    );

    let catalog = load_catalog(&config)?;
    info!("Catalog ready with {} items", catalog.len());

    let cache = SharedCache::default();
    let cleanup_handle = spawn_cleanup_task(cache.handle(), config.cleanup_interval);
    info!("Background cache sweep started");

    let state = AppState::new(
        Arc::new(SharedCatalog::new(catalog)),
        Arc::new(cache),
        &config,
    );
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Builds the catalog, seeding it from the configured file if there is one.
fn load_catalog(config: &Config) -> anyhow::Result<Catalog> {
    let mut catalog = Catalog::new();

    let Some(path) = &config.catalog_path else {
        warn!("CATALOG_PATH not set, starting with an empty catalog");
        return Ok(catalog);
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    catalog
        .seed_from_json(&json)
        .with_context(|| format!("failed to seed catalog from {}", path.display()))?;

    Ok(catalog)
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweep task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    cleanup_handle.abort();
    warn!("Cache sweep task aborted");
}
