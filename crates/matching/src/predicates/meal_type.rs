//! Meal-type predicate.

use crate::criteria::FilterCriteria;
use crate::traits::Predicate;
use recipe_store::Recipe;

/// Keeps recipes tagged with any of the requested meal types.
///
/// ## Algorithm
/// 1. No requested meal types: match
/// 2. Join the recipe's meal-type tags with spaces and lower-case the text
/// 3. Match if any requested meal type, lower-cased, is a substring of it
///
/// Containment rather than tag equality means "Dinner" matches a recipe
/// tagged "Weeknight Dinner Ideas".
pub struct MealTypePredicate;

impl Predicate for MealTypePredicate {
    fn name(&self) -> &str {
        "MealTypePredicate"
    }

    fn evaluate(&self, recipe: &Recipe, criteria: &FilterCriteria) -> bool {
        let requested = criteria.meal_types();
        if requested.is_empty() {
            return true;
        }

        let tags = recipe.meal_types.join(" ").to_lowercase();
        requested
            .iter()
            .any(|meal_type| tags.contains(&meal_type.to_lowercase()))
    }
}
