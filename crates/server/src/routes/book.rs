//! Recipe book endpoints: list, create, find.

use crate::error::{ServiceError, ServiceResult};
use crate::state::BookState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use recipe_store::{Recipe, RecipeField};
use serde::Deserialize;
use tracing::info;

/// Every stored recipe
pub async fn list_recipes(State(state): State<BookState>) -> Json<Vec<Recipe>> {
    Json(state.store.all())
}

/// Store one recipe from a JSON body and return it with its id.
///
/// The body is decoded by hand so malformed JSON is a 400 with the usual
/// error body.
pub async fn create_recipe(
    State(state): State<BookState>,
    body: Bytes,
) -> ServiceResult<Json<Recipe>> {
    let recipe: Recipe = serde_json::from_slice(&body)?;

    let store = state.store.clone();
    let stored = tokio::task::spawn_blocking(move || store.insert(recipe))
        .await
        .map_err(|e| ServiceError::Internal(format!("Insert task failed: {e}")))??;

    info!("Created recipe {} ({})", stored.id, stored.title);
    Ok(Json(stored))
}

#[derive(Debug, Deserialize)]
pub struct FindParams {
    pub field: Option<String>,
    pub value: Option<String>,
}

/// Recipes whose `field` equals `value`; possibly none.
pub async fn find_recipes(
    State(state): State<BookState>,
    Query(params): Query<FindParams>,
) -> ServiceResult<Json<Vec<Recipe>>> {
    let field = params
        .field
        .ok_or_else(|| ServiceError::BadRequest("missing query parameter: field".into()))?;
    let value = params
        .value
        .ok_or_else(|| ServiceError::BadRequest("missing query parameter: value".into()))?;

    let field: RecipeField = field.parse()?;
    Ok(Json(state.store.find_by(field, &value)))
}
