//! Service startup and routing
//!
//! Each service:
//! 1. Attaches to its backing store under connect-with-retry
//! 2. Builds its router with tracing, timeout and CORS layers
//! 3. Serves until Ctrl+C or SIGTERM
//!
//! A shutdown signal during step 1 stops the retry loop and the service
//! exits cleanly without serving.

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::routes::{book, health, not_found, search};
use crate::search::RecipeSearch;
use crate::source::{RecipeSource, RemoteRecipeBook};
use crate::state::{BookState, SearchState};
use anyhow::{Context, Result, bail};
use axum::Router;
use axum::http::{Method, StatusCode};
use axum::routing::{get, post};
use bootstrap::{ConnectError, connect, shutdown_signal};
use recipe_store::RecipeStore;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Router for the recipe book service
pub fn build_book_router(state: BookState) -> Router {
    Router::new()
        .route("/list", get(book::list_recipes))
        .route("/create", post(book::create_recipe))
        .route("/find", get(book::find_recipes))
        .route("/health", get(health::book_health))
        .fallback(not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router for the recipe search service
///
/// Any origin may issue GET requests.
pub fn build_search_router(state: SearchState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/recipe", get(search::search_recipes))
        .route("/details", get(search::recipe_details))
        .route("/health", get(health::search_health))
        .fallback(not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Open the configured store file, retrying per the config's policy.
///
/// Returns `Ok(None)` when shutdown was requested before the store opened.
pub async fn open_store(config: &ServiceConfig) -> Result<Option<Arc<RecipeStore>>> {
    let Some(path) = config.store_path.clone() else {
        bail!("No recipe store path configured");
    };
    let create_if_missing = config.create_if_missing;

    info!("Opening recipe store {}", path.display());
    let result = connect(&config.retry_policy(), shutdown_signal(), |_| {
        let path = path.clone();
        async move {
            tokio::task::spawn_blocking(move || RecipeStore::open(&path, create_if_missing))
                .await
                .map_err(|e| ServiceError::Internal(format!("Store open task failed: {e}")))?
                .map_err(ServiceError::from)
        }
    })
    .await;

    match result {
        Ok(store) => Ok(Some(Arc::new(store))),
        Err(ConnectError::Cancelled { .. }) => Ok(None),
        Err(err) => Err(err)
            .with_context(|| format!("Failed to open recipe store {}", path.display())),
    }
}

/// Reach the configured recipe book, retrying its health probe.
///
/// Returns `Ok(None)` when shutdown was requested before the book answered.
pub async fn connect_book(config: &ServiceConfig) -> Result<Option<RemoteRecipeBook>> {
    let Some(url) = config.book_url.as_deref() else {
        bail!("No recipe book URL configured");
    };
    let book = RemoteRecipeBook::new(url, config.timeout())?;

    info!("Connecting to recipe book at {}", book.base_url());
    let result = connect(&config.retry_policy(), shutdown_signal(), |_| {
        let book = book.clone();
        async move { book.probe().await }
    })
    .await;

    match result {
        Ok(()) => Ok(Some(book)),
        Err(ConnectError::Cancelled { .. }) => Ok(None),
        Err(err) => Err(err)
            .with_context(|| format!("Recipe book at {} is unreachable", book.base_url())),
    }
}

/// Start the recipe book service and serve until shutdown.
pub async fn run_book_service(config: ServiceConfig) -> Result<()> {
    let addr = config.socket_addr()?;

    let Some(store) = open_store(&config).await? else {
        info!("Shutdown requested during startup");
        return Ok(());
    };

    let app = build_book_router(BookState::new(config, store));
    serve(app, addr, "recipe book").await
}

/// Start the recipe search service and serve until shutdown.
///
/// A configured store file takes precedence over a recipe book URL.
pub async fn run_search_service(config: ServiceConfig) -> Result<()> {
    let addr = config.socket_addr()?;

    let source = if config.store_path.is_some() {
        open_store(&config).await?.map(RecipeSource::Local)
    } else if config.book_url.is_some() {
        connect_book(&config).await?.map(RecipeSource::Remote)
    } else {
        bail!("Recipe search needs either a store path or a recipe book URL");
    };

    let Some(source) = source else {
        info!("Shutdown requested during startup");
        return Ok(());
    };

    info!("Searching recipes from {}", source.describe());
    let app = build_search_router(SearchState::new(config, RecipeSearch::new(source)));
    serve(app, addr, "recipe search").await
}

async fn serve(app: Router, addr: std::net::SocketAddr, service: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Starting {} service on {}", service, addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("{} service shutdown complete", service);
    Ok(())
}
