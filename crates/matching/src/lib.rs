//! Recipe matching engine.
//!
//! This crate provides:
//! - Query normalization from raw, multi-valued parameters into [`FilterCriteria`]
//! - The [`Predicate`] trait and one predicate per criteria field
//! - [`RecipeMatcher`] for combining predicates and filtering collections
//!
//! ## Matching rules
//! A recipe matches when every non-empty field of the criteria is satisfied:
//! 1. Meal type: any requested value is a substring of the joined tags
//! 2. Dietary restriction: any requested value equals a tag, or "none" was requested
//! 3. Ingredients: every term is a substring of the joined ingredient lines
//!
//! All comparisons ignore case.
//!
//! ## Example Usage
//! ```ignore
//! use matching::{FilterCriteria, QueryParams, RecipeMatcher};
//!
//! let params: QueryParams = [("meal_type", "Dinner"), ("ingredients", "cheese")]
//!     .into_iter()
//!     .collect();
//! let criteria = FilterCriteria::from_query(&params);
//!
//! let hits = RecipeMatcher::standard().search(&recipes, &criteria)?;
//! ```

pub mod criteria;
pub mod error;
pub mod matcher;
pub mod predicates;
pub mod traits;

pub use criteria::{FieldAliases, FilterCriteria, QueryParams};
pub use error::{MatchError, Result};
pub use matcher::RecipeMatcher;
pub use traits::Predicate;

use recipe_store::Recipe;

/// Whether `recipe` satisfies `criteria` under the standard rules.
pub fn matches(recipe: &Recipe, criteria: &FilterCriteria) -> bool {
    RecipeMatcher::standard().matches(recipe, criteria)
}

/// Every record satisfying `criteria` under the standard rules, in input order.
pub fn filter_all(records: &[Recipe], criteria: &FilterCriteria) -> Vec<Recipe> {
    RecipeMatcher::standard().filter_all(records, criteria)
}
