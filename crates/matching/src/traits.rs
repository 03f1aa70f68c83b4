//! Core trait for recipe matching.
//!
//! Each criteria field is checked by its own [`Predicate`]; the
//! [`RecipeMatcher`](crate::RecipeMatcher) requires every predicate to pass.

use crate::criteria::FilterCriteria;
use recipe_store::Recipe;

/// One field's match rule.
///
/// `Send + Sync` so a matcher can be shared across in-flight requests and
/// evaluated from rayon worker threads.
pub trait Predicate: Send + Sync {
    /// Returns the name of this predicate (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `recipe` satisfies this predicate's field of `criteria`.
    ///
    /// An empty field in `criteria` must always evaluate to `true`.
    fn evaluate(&self, recipe: &Recipe, criteria: &FilterCriteria) -> bool;
}
