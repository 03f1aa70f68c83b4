//! The RecipeMatcher combines predicates and applies them to collections.
//!
//! A recipe matches when every predicate accepts it. Results always come
//! back in input order, so the same records and criteria give the same
//! answer every time.

use crate::criteria::FilterCriteria;
use crate::error::{MatchError, Result};
use crate::predicates::{DietaryPredicate, IngredientPredicate, MealTypePredicate};
use crate::traits::Predicate;
use rayon::prelude::*;
use recipe_store::Recipe;
use tracing::{debug, trace};

/// Chains predicates together with logical AND.
///
/// ## Usage
/// ```ignore
/// let matcher = RecipeMatcher::new()
///     .add_predicate(MealTypePredicate)
///     .add_predicate(DietaryPredicate)
///     .add_predicate(IngredientPredicate);
///
/// let hits = matcher.filter_all(&recipes, &criteria);
/// ```
pub struct RecipeMatcher {
    predicates: Vec<Box<dyn Predicate>>,
}

impl RecipeMatcher {
    /// Create a matcher with no predicates; it accepts every recipe.
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Meal type, dietary restriction and ingredients, in that order.
    pub fn standard() -> Self {
        Self::new()
            .add_predicate(MealTypePredicate)
            .add_predicate(DietaryPredicate)
            .add_predicate(IngredientPredicate)
    }

    /// Add a predicate to the matcher (builder pattern).
    pub fn add_predicate(mut self, predicate: impl Predicate + 'static) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    pub fn predicate_names(&self) -> Vec<&str> {
        self.predicates.iter().map(|p| p.name()).collect()
    }

    /// Whether one recipe satisfies every predicate.
    pub fn matches(&self, recipe: &Recipe, criteria: &FilterCriteria) -> bool {
        self.predicates.iter().all(|predicate| {
            let accepted = predicate.evaluate(recipe, criteria);
            if !accepted {
                trace!("{} rejected recipe {}", predicate.name(), recipe.id);
            }
            accepted
        })
    }

    /// Every record that matches, in input order.
    ///
    /// Records are evaluated in parallel; the collect keeps their order.
    pub fn filter_all(&self, records: &[Recipe], criteria: &FilterCriteria) -> Vec<Recipe> {
        debug!("Matching {} recipes against {:?}", records.len(), criteria);

        let matched: Vec<Recipe> = records
            .par_iter()
            .filter(|recipe| self.matches(recipe, criteria))
            .cloned()
            .collect();

        debug!("Matched {} of {} recipes", matched.len(), records.len());
        matched
    }

    /// Like [`filter_all`](Self::filter_all), but zero matches is
    /// [`MatchError::NoMatch`].
    pub fn search(&self, records: &[Recipe], criteria: &FilterCriteria) -> Result<Vec<Recipe>> {
        let matched = self.filter_all(records, criteria);
        if matched.is_empty() {
            return Err(MatchError::NoMatch);
        }
        Ok(matched)
    }
}

impl Default for RecipeMatcher {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipes() -> Vec<Recipe> {
        vec![
            Recipe::new("Pizza")
                .with_id("1")
                .with_ingredients(["dough", "sauce", "cheese"])
                .with_meal_types(["Dinner"]),
            Recipe::new("Muffins")
                .with_id("2")
                .with_ingredients(["flour", "egg", "milk"])
                .with_meal_types(["Breakfast"])
                .with_dietary_restrictions(["Vegetarian"]),
        ]
    }

    #[test]
    fn test_empty_matcher_accepts_everything() {
        let matcher = RecipeMatcher::new();
        let criteria = FilterCriteria::unconstrained().with_meal_types(["Lunch"]);

        assert_eq!(matcher.filter_all(&recipes(), &criteria).len(), 2);
    }

    #[test]
    fn test_standard_predicate_order() {
        assert_eq!(
            RecipeMatcher::standard().predicate_names(),
            vec!["MealTypePredicate", "DietaryPredicate", "IngredientPredicate"]
        );
    }

    #[test]
    fn test_fields_combine_with_and() {
        let matcher = RecipeMatcher::standard();

        // Meal type matches Muffins but the ingredient does not
        let criteria = FilterCriteria::unconstrained()
            .with_meal_types(["Breakfast"])
            .with_ingredients(["cheese"]);
        assert!(matcher.filter_all(&recipes(), &criteria).is_empty());
    }

    #[test]
    fn test_search_reports_no_match() {
        let matcher = RecipeMatcher::standard();
        let criteria = FilterCriteria::unconstrained().with_dietary_restrictions(["vegan"]);

        assert_eq!(matcher.search(&recipes(), &criteria), Err(MatchError::NoMatch));
    }

    #[test]
    fn test_search_keeps_input_order() {
        let matcher = RecipeMatcher::standard();
        let hits = matcher
            .search(&recipes(), &FilterCriteria::unconstrained())
            .unwrap();

        let ids: Vec<_> = hits.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
