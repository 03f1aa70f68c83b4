//! # Recipe Store Crate
//!
//! This crate owns the recipe records behind the recipe book service.
//!
//! ## Main Components
//!
//! - **types**: The `Recipe` record and the `RecipeField` lookup keys
//! - **parser**: Decode store files into recipes
//! - **store**: File-backed `RecipeStore` with equality lookups
//! - **error**: Error types for loading and writing
//!
//! ## Example Usage
//!
//! ```ignore
//! use recipe_store::{RecipeField, RecipeStore};
//!
//! let store = RecipeStore::open("data/recipes.json", true)?;
//!
//! let dinners = store.find_by(RecipeField::MealType, "Dinner");
//! println!("{} of {} recipes are dinners", dinners.len(), store.len());
//! ```

// Public modules
pub mod error;
pub mod parser;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{Result, StoreError};
pub use store::RecipeStore;
pub use types::{Recipe, RecipeField, RecipeId};
