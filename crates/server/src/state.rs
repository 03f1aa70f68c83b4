use crate::config::ServiceConfig;
use crate::search::RecipeSearch;
use recipe_store::RecipeStore;
use std::sync::Arc;
use std::time::Instant;

/// Shared state of the recipe book service
#[derive(Clone)]
pub struct BookState {
    pub config: Arc<ServiceConfig>,
    pub store: Arc<RecipeStore>,
    pub started_at: Instant,
}

impl BookState {
    pub fn new(config: ServiceConfig, store: Arc<RecipeStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
            started_at: Instant::now(),
        }
    }
}

/// Shared state of the recipe search service
#[derive(Clone)]
pub struct SearchState {
    pub config: Arc<ServiceConfig>,
    pub search: Arc<RecipeSearch>,
    pub started_at: Instant,
}

impl SearchState {
    pub fn new(config: ServiceConfig, search: RecipeSearch) -> Self {
        Self {
            config: Arc::new(config),
            search: Arc::new(search),
            started_at: Instant::now(),
        }
    }
}
