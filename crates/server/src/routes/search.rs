//! Recipe search endpoints.

use crate::error::{ServiceError, ServiceResult};
use crate::state::SearchState;
use axum::Json;
use axum::extract::{Query, State};
use matching::QueryParams;
use recipe_store::Recipe;
use serde::Deserialize;

/// Filter recipes by the query string.
///
/// Keys may repeat (`?meal_type=Lunch&meal_type=Dinner`); every value is kept.
pub async fn search_recipes(
    State(state): State<SearchState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ServiceResult<Json<Vec<Recipe>>> {
    let params: QueryParams = pairs.into_iter().collect();
    let recipes = state.search.search(&params).await?;
    Ok(Json(recipes))
}

#[derive(Debug, Deserialize)]
pub struct DetailsParams {
    pub id: Option<String>,
}

pub async fn recipe_details(
    State(state): State<SearchState>,
    Query(params): Query<DetailsParams>,
) -> ServiceResult<Json<Recipe>> {
    let id = params
        .id
        .filter(|id| !id.is_empty())
        .ok_or(ServiceError::RecipeNotFound)?;

    Ok(Json(state.search.details(&id).await?))
}
