//! # Recipe search
//!
//! Coordinates one search request:
//! 1. Normalize the raw query into criteria
//! 2. Fetch every record from the source
//! 3. Run the matcher over them on the blocking pool
//! 4. Report no matches as an error

use std::sync::Arc;
use std::time::Instant;

use matching::{FieldAliases, FilterCriteria, QueryParams, RecipeMatcher};
use recipe_store::Recipe;
use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};
use crate::source::RecipeSource;

#[derive(Clone)]
pub struct RecipeSearch {
    source: RecipeSource,
    matcher: Arc<RecipeMatcher>,
    aliases: FieldAliases,
}

impl RecipeSearch {
    /// Search `source` with the standard matcher and query keys.
    pub fn new(source: RecipeSource) -> Self {
        Self::with_matcher(source, RecipeMatcher::standard(), FieldAliases::default())
    }

    pub fn with_matcher(
        source: RecipeSource,
        matcher: RecipeMatcher,
        aliases: FieldAliases,
    ) -> Self {
        Self {
            source,
            matcher: Arc::new(matcher),
            aliases,
        }
    }

    pub fn source(&self) -> &RecipeSource {
        &self.source
    }

    /// Recipes matching `params`, in source order.
    pub async fn search(&self, params: &QueryParams) -> ServiceResult<Vec<Recipe>> {
        let start_time = Instant::now();

        let criteria = FilterCriteria::from_query_with(params, &self.aliases);
        debug!("Normalized query into {:?}", criteria);

        let records = self.source.all().await?;
        debug!("Fetched {} records", records.len());

        let matcher = self.matcher.clone();
        let matched = tokio::task::spawn_blocking(move || matcher.search(&records, &criteria))
            .await
            .map_err(|e| ServiceError::Internal(format!("Matching task failed: {e}")))?;

        let elapsed = start_time.elapsed();
        match &matched {
            Ok(recipes) => info!("Search matched {} recipes in {:.2?}", recipes.len(), elapsed),
            Err(_) => info!("Search matched nothing in {:.2?}", elapsed),
        }

        Ok(matched?)
    }

    /// One recipe by id.
    pub async fn details(&self, id: &str) -> ServiceResult<Recipe> {
        self.source
            .get(id)
            .await?
            .ok_or(ServiceError::RecipeNotFound)
    }
}
