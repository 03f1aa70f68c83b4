//! File-backed recipe store.
//!
//! Holds the whole collection in memory behind a read/write lock and writes
//! it back to its file on every insert. Writes go to a sibling temp file that
//! is renamed over the store file, so a crash mid-write leaves the previous
//! contents intact.

use crate::error::{Result, StoreError};
use crate::parser;
use crate::types::{Recipe, RecipeField};
use parking_lot::RwLock;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The recipe book's backing collection.
#[derive(Debug)]
pub struct RecipeStore {
    /// `None` for a purely in-memory store
    path: Option<PathBuf>,
    recipes: RwLock<Vec<Recipe>>,
}

impl RecipeStore {
    /// Open a store file.
    ///
    /// A missing file is an error unless `create_if_missing` is set, in which
    /// case an empty store file is created. Recipes without an id are given
    /// one; ids already present must be unique.
    pub fn open(path: impl AsRef<Path>, create_if_missing: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            if !create_if_missing {
                return Err(StoreError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            info!("Creating empty recipe store at {}", path.display());
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, "[]")?;
        }

        let mut recipes = parser::parse_recipes(&path)?;
        parser::validate_unique_ids(&recipes)?;

        let mut assigned = 0;
        for recipe in recipes.iter_mut().filter(|r| r.id.is_empty()) {
            recipe.id = new_id();
            assigned += 1;
        }

        let store = Self {
            path: Some(path),
            recipes: RwLock::new(recipes),
        };
        if assigned > 0 {
            debug!("Assigned ids to {} recipes", assigned);
            store.persist(&store.recipes.read())?;
        }

        info!(
            "Opened recipe store {} with {} recipes",
            store.path_display(),
            store.len()
        );
        Ok(store)
    }

    /// A store that never touches disk.
    pub fn in_memory(recipes: Vec<Recipe>) -> Self {
        Self {
            path: None,
            recipes: RwLock::new(recipes),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.recipes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.read().is_empty()
    }

    /// Snapshot of every recipe, in insertion order.
    pub fn all(&self) -> Vec<Recipe> {
        self.recipes.read().clone()
    }

    /// Get a recipe by id
    pub fn get(&self, id: &str) -> Option<Recipe> {
        self.recipes.read().iter().find(|r| r.id == id).cloned()
    }

    /// All recipes whose `field` equals `value`, in insertion order.
    pub fn find_by(&self, field: RecipeField, value: &str) -> Vec<Recipe> {
        self.recipes
            .read()
            .par_iter()
            .filter(|recipe| recipe.field_equals(field, value))
            .cloned()
            .collect()
    }

    /// Store a new recipe and write the collection back to disk.
    ///
    /// An empty id is replaced with a generated one. The stored recipe is
    /// returned.
    pub fn insert(&self, mut recipe: Recipe) -> Result<Recipe> {
        let mut recipes = self.recipes.write();

        if recipe.id.is_empty() {
            recipe.id = new_id();
        } else if recipes.iter().any(|r| r.id == recipe.id) {
            return Err(StoreError::DuplicateId { id: recipe.id });
        }

        recipes.push(recipe.clone());
        if let Err(e) = self.persist(&recipes) {
            recipes.pop();
            return Err(e);
        }

        debug!("Inserted recipe {} ({})", recipe.id, recipe.title);
        Ok(recipe)
    }

    fn persist(&self, recipes: &[Recipe]) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let tmp = path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(recipes)?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    fn path_display(&self) -> String {
        self.path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<memory>".to_string())
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
