//! Dietary-restriction predicate.

use crate::criteria::FilterCriteria;
use crate::traits::Predicate;
use recipe_store::Recipe;

/// Requested value meaning "no dietary restriction".
pub const NO_RESTRICTION: &str = "none";

/// Keeps recipes carrying any one of the requested dietary tags.
///
/// ## Algorithm
/// 1. No requested restrictions: match
/// 2. Every requested value is blank or `"none"` (trimmed, any case): match
/// 3. Otherwise match if any requested restriction equals any of the
///    recipe's tags, trimmed and case-insensitively
///
/// Mixed with real restrictions, `"none"` is not a free pass:
/// `{"vegan", "none"}` still needs a vegan tag.
///
/// Comparison is whole-tag equality: "vegan" does not match
/// "vegan-friendly-ish".
pub struct DietaryPredicate;

impl DietaryPredicate {
    fn is_no_restriction(value: &str) -> bool {
        let value = value.trim();
        value.is_empty() || value.eq_ignore_ascii_case(NO_RESTRICTION)
    }
}

impl Predicate for DietaryPredicate {
    fn name(&self) -> &str {
        "DietaryPredicate"
    }

    fn evaluate(&self, recipe: &Recipe, criteria: &FilterCriteria) -> bool {
        let requested = criteria.dietary_restrictions();
        if requested.is_empty() {
            return true;
        }
        if requested.iter().all(|r| Self::is_no_restriction(r)) {
            return true;
        }

        let tags: Vec<String> = recipe
            .dietary_restrictions
            .iter()
            .map(|tag| tag.trim().to_lowercase())
            .collect();

        requested.iter().any(|wanted| {
            let wanted = wanted.trim().to_lowercase();
            tags.iter().any(|tag| *tag == wanted)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(tags: &[&str]) -> Recipe {
        Recipe::new("Test").with_dietary_restrictions(tags.iter().copied())
    }

    fn wanting(restrictions: &[&str]) -> FilterCriteria {
        FilterCriteria::unconstrained().with_dietary_restrictions(restrictions.iter().copied())
    }

    #[test]
    fn test_empty_request_matches_anything() {
        let criteria = FilterCriteria::unconstrained();
        assert!(DietaryPredicate.evaluate(&tagged(&[]), &criteria));
        assert!(DietaryPredicate.evaluate(&tagged(&["Vegan"]), &criteria));
    }

    #[test]
    fn test_none_sentinel_is_no_restriction() {
        for sentinel in ["None", "none", "  NONE ", "", "   "] {
            let criteria = wanting(&[sentinel]);
            assert!(DietaryPredicate.evaluate(&tagged(&[]), &criteria), "{:?}", sentinel);
            assert!(DietaryPredicate.evaluate(&tagged(&["Vegan"]), &criteria), "{:?}", sentinel);
        }
    }

    #[test]
    fn test_none_alongside_other_values_is_still_constrained() {
        for mixed in [&["vegan", "none"][..], &["vegan", ""][..], &["vegan", " None "][..]] {
            let criteria = wanting(mixed);
            assert!(!DietaryPredicate.evaluate(&tagged(&[]), &criteria), "{:?}", mixed);
            assert!(!DietaryPredicate.evaluate(&tagged(&["Vegetarian"]), &criteria), "{:?}", mixed);
            assert!(DietaryPredicate.evaluate(&tagged(&["Vegan"]), &criteria), "{:?}", mixed);
        }
    }

    #[test]
    fn test_only_sentinels_is_no_restriction() {
        assert!(DietaryPredicate.evaluate(&tagged(&[]), &wanting(&["none", "", "NONE"])));
    }

    #[test]
    fn test_exact_match_not_substring() {
        let criteria = wanting(&["vegan"]);
        assert!(!DietaryPredicate.evaluate(&tagged(&["vegan-friendly-ish"]), &criteria));
        assert!(DietaryPredicate.evaluate(&tagged(&[" Vegan "]), &criteria));
    }

    #[test]
    fn test_any_requested_restriction_is_enough() {
        let criteria = wanting(&["vegan", "gluten-free"]);
        assert!(DietaryPredicate.evaluate(&tagged(&["Gluten-Free"]), &criteria));
        assert!(DietaryPredicate.evaluate(&tagged(&["vegetarian", "vegan"]), &criteria));
        assert!(!DietaryPredicate.evaluate(&tagged(&["vegetarian"]), &criteria));
    }

    #[test]
    fn test_untagged_recipe_fails_constrained_request() {
        assert!(!DietaryPredicate.evaluate(&tagged(&[]), &wanting(&["vegetarian"])));
    }
}
