//! Where the search service reads its recipes from.

use crate::error::{ServiceError, ServiceResult};
use recipe_store::{Recipe, RecipeStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// A recipe book service reached over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteRecipeBook {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteRecipeBook {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ServiceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Internal(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check the book answers its health endpoint.
    pub async fn probe(&self) -> ServiceResult<()> {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Every recipe the book holds, in its order.
    pub async fn fetch_all(&self) -> ServiceResult<Vec<Recipe>> {
        let recipes: Vec<Recipe> = self
            .client
            .get(format!("{}/list", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("Fetched {} recipes from {}", recipes.len(), self.base_url);
        Ok(recipes)
    }
}

/// Local store file or remote recipe book.
#[derive(Debug, Clone)]
pub enum RecipeSource {
    Local(Arc<RecipeStore>),
    Remote(RemoteRecipeBook),
}

impl RecipeSource {
    pub async fn all(&self) -> ServiceResult<Vec<Recipe>> {
        match self {
            RecipeSource::Local(store) => Ok(store.all()),
            RecipeSource::Remote(book) => book.fetch_all().await,
        }
    }

    pub async fn get(&self, id: &str) -> ServiceResult<Option<Recipe>> {
        match self {
            RecipeSource::Local(store) => Ok(store.get(id)),
            RecipeSource::Remote(book) => {
                let recipes = book.fetch_all().await?;
                Ok(recipes.into_iter().find(|r| r.id == id))
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            RecipeSource::Local(store) => match store.path() {
                Some(path) => format!("store file {}", path.display()),
                None => "in-memory store".to_string(),
            },
            RecipeSource::Remote(book) => format!("recipe book at {}", book.base_url()),
        }
    }
}
