//! Required-ingredients predicate.

use crate::criteria::FilterCriteria;
use crate::traits::Predicate;
use recipe_store::Recipe;

/// Keeps recipes that mention every requested ingredient term.
///
/// ## Algorithm
/// 1. No requested terms: match
/// 2. Join the recipe's ingredient lines with spaces and lower-case the text
/// 3. Match only if every term, lower-cased, is a substring of it
///
/// Partial words count, so "egg" is found in "eggplant".
pub struct IngredientPredicate;

impl Predicate for IngredientPredicate {
    fn name(&self) -> &str {
        "IngredientPredicate"
    }

    fn evaluate(&self, recipe: &Recipe, criteria: &FilterCriteria) -> bool {
        let terms = criteria.ingredient_terms();
        if terms.is_empty() {
            return true;
        }

        let text = recipe.ingredients.join(" ").to_lowercase();
        terms.iter().all(|term| text.contains(&term.to_lowercase()))
    }
}
