use crate::state::{BookState, SearchState};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde_json::json;

/// Health check for the recipe book
pub async fn book_health(State(state): State<BookState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "recipe-book",
        "recipes": state.store.len(),
        "uptime_seconds": state.started_at.elapsed().as_secs(),
    }))
}

/// Health check for the recipe search service
pub async fn search_health(State(state): State<SearchState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "recipe-search",
        "source": state.search.source().describe(),
        "uptime_seconds": state.started_at.elapsed().as_secs(),
    }))
}
