//! Integration tests for the matching engine.
//!
//! These run raw query parameters through normalization and the standard
//! matcher against a small catalog.

use matching::predicates::{DietaryPredicate, MealTypePredicate};
use matching::{
    FilterCriteria, MatchError, Predicate, QueryParams, RecipeMatcher, filter_all, matches,
};
use recipe_store::Recipe;

fn create_test_catalog() -> Vec<Recipe> {
    vec![
        Recipe::new("Pizza")
            .with_id("1")
            .with_ingredients(["dough", "tomato sauce", "mozzarella cheese"])
            .with_meal_types(["Dinner", "Main Course"]),
        Recipe::new("Muffins")
            .with_id("2")
            .with_ingredients(["2 cups flour", "2 eggs", "1 cup milk"])
            .with_meal_types(["Breakfast"])
            .with_dietary_restrictions(["Vegetarian"]),
        Recipe::new("Lentil Soup")
            .with_id("3")
            .with_ingredients(["lentils", "carrot", "onion", "vegetable stock"])
            .with_meal_types(["Lunch", "Dinner"])
            .with_dietary_restrictions(["Vegan", "Gluten-Free"]),
        Recipe::new("Omelette")
            .with_id("4")
            .with_ingredients(["3 eggs", "cheddar cheese", "chives"])
            .with_meal_types(["Breakfast", "Brunch"])
            .with_dietary_restrictions(["Vegetarian", "Gluten-Free"]),
    ]
}

fn query(pairs: &[(&str, &str)]) -> FilterCriteria {
    let params: QueryParams = pairs.iter().copied().collect();
    FilterCriteria::from_query(&params)
}

fn ids(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_unconstrained_returns_everything_in_order() {
    let catalog = create_test_catalog();
    let hits = filter_all(&catalog, &query(&[]));

    assert_eq!(hits, catalog);
}

#[test]
fn test_breakfast_with_egg_and_flour() {
    let catalog = create_test_catalog();
    let hits = filter_all(
        &catalog,
        &query(&[("meal_type", "Breakfast"), ("ingredients", "egg flour")]),
    );

    assert_eq!(ids(&hits), vec!["2"]);
    assert_eq!(hits[0].title, "Muffins");
}

#[test]
fn test_dinner_only() {
    let catalog = create_test_catalog();
    let hits = filter_all(&catalog, &query(&[("meal_type", "dinner")]));

    assert_eq!(ids(&hits), vec!["1", "3"]);
}

#[test]
fn test_vegan_dinner_has_no_pizza() {
    let catalog = create_test_catalog();
    let hits = filter_all(
        &catalog,
        &query(&[("meal_type", "Dinner"), ("dietary_restriction", "vegan")]),
    );

    assert_eq!(ids(&hits), vec!["3"]);
}

#[test]
fn test_diet_none_is_no_restriction() {
    let catalog = create_test_catalog();
    let with_none = filter_all(
        &catalog,
        &query(&[("meal_type", "Breakfast"), ("dietary_restriction", "None")]),
    );
    let without = filter_all(&catalog, &query(&[("meal_type", "Breakfast")]));

    assert_eq!(with_none, without);
    assert_eq!(ids(&with_none), vec!["2", "4"]);
}

#[test]
fn test_pizza_muffins_vegetarian_scenario() {
    let pizza = Recipe::new("Pizza")
        .with_id("1")
        .with_ingredients(["dough", "sauce", "cheese"])
        .with_meal_types(["Dinner"])
        .with_instructions("Stretch the dough, add sauce and cheese, bake.")
        .with_photo_url("https://img.example/pizza.jpg");
    let muffins = Recipe::new("Muffins")
        .with_id("2")
        .with_ingredients(["flour", "egg", "milk"])
        .with_meal_types(["Breakfast"])
        .with_dietary_restrictions(["Vegetarian"])
        .with_instructions("Mix, fill the tin, bake for 20 minutes.")
        .with_photo_url("https://img.example/muffins.jpg");
    let catalog = vec![pizza, muffins.clone()];

    let criteria = FilterCriteria::unconstrained().with_dietary_restrictions(["vegetarian"]);
    let hits = filter_all(&catalog, &criteria);

    assert_eq!(hits, vec![muffins]);
}

#[test]
fn test_diet_none_mixed_with_real_restriction_is_constrained() {
    let catalog = create_test_catalog();

    let vegan_or_none = filter_all(
        &catalog,
        &query(&[("dietary_restriction", "vegan"), ("dietary_restriction", "none")]),
    );
    assert_eq!(ids(&vegan_or_none), vec!["3"]);

    let vegan_or_blank = filter_all(&catalog, &query(&[("diet", "vegan"), ("diet", "")]));
    assert_eq!(ids(&vegan_or_blank), vec!["3"]);

    // Neither recipe in the two-recipe catalog is vegan
    let two = &catalog[..2];
    assert!(filter_all(two, &query(&[("diet", "vegan"), ("diet", "none")])).is_empty());
}

#[test]
fn test_multiple_dietary_values_are_alternatives() {
    let catalog = create_test_catalog();
    let hits = filter_all(
        &catalog,
        &query(&[("diet", "vegan"), ("dietary_restriction", "vegetarian")]),
    );

    assert_eq!(ids(&hits), vec!["2", "3", "4"]);
}

#[test]
fn test_multiple_meal_types_are_alternatives() {
    let catalog = create_test_catalog();
    let hits = filter_all(&catalog, &query(&[("meal_type", "Lunch"), ("type", "Brunch")]));

    assert_eq!(ids(&hits), vec!["3", "4"]);
}

#[test]
fn test_ingredient_terms_are_all_required() {
    let catalog = create_test_catalog();

    let cheese_and_egg = filter_all(&catalog, &query(&[("ingredients", "cheese egg")]));
    assert_eq!(ids(&cheese_and_egg), vec!["4"]);

    // Substring matching: "egg" finds "2 eggs"
    let egg = filter_all(&catalog, &query(&[("includeIngredients", "EGG")]));
    assert_eq!(ids(&egg), vec!["2", "4"]);
}

#[test]
fn test_search_reports_no_match() {
    let catalog = create_test_catalog();
    let matcher = RecipeMatcher::standard();
    let result = matcher.search(
        &catalog,
        &query(&[("meal_type", "Dessert"), ("ingredients", "chocolate")]),
    );

    assert_eq!(result, Err(MatchError::NoMatch));
    assert_eq!(
        MatchError::NoMatch.to_string(),
        "No recipes found matching the search criteria"
    );
}

#[test]
fn test_empty_catalog() {
    let hits = filter_all(&[], &query(&[("meal_type", "Dinner")]));
    assert!(hits.is_empty());
    assert!(filter_all(&[], &query(&[])).is_empty());
}

#[test]
fn test_single_record_matches_agrees_with_filter_all() {
    let catalog = create_test_catalog();
    let criteria = query(&[("meal_type", "Breakfast"), ("diet", "gluten-free")]);

    let expected: Vec<Recipe> = catalog
        .iter()
        .filter(|recipe| matches(recipe, &criteria))
        .cloned()
        .collect();

    assert_eq!(filter_all(&catalog, &criteria), expected);
    assert_eq!(ids(&expected), vec!["4"]);
}

#[test]
fn test_repeated_runs_are_identical() {
    let catalog = create_test_catalog();
    let criteria = query(&[("meal_type", "Dinner"), ("meal_type", "Breakfast")]);

    let first = filter_all(&catalog, &criteria);
    for _ in 0..10 {
        assert_eq!(filter_all(&catalog, &criteria), first);
    }
}

#[test]
fn test_large_catalog_keeps_order() {
    let catalog: Vec<Recipe> = (0..2_000)
        .map(|i| {
            let meal = if i % 3 == 0 { "Dinner" } else { "Lunch" };
            Recipe::new(format!("Recipe {i}"))
                .with_id(i.to_string())
                .with_meal_types([meal])
        })
        .collect();

    let hits = filter_all(&catalog, &query(&[("meal_type", "Dinner")]));

    assert_eq!(hits.len(), 667);
    let expected: Vec<String> = (0..2_000)
        .filter(|i| i % 3 == 0)
        .map(|i| i.to_string())
        .collect();
    let got: Vec<String> = hits.into_iter().map(|r| r.id).collect();
    assert_eq!(got, expected);
}

struct TitlePredicate(&'static str);

impl Predicate for TitlePredicate {
    fn name(&self) -> &str {
        "TitlePredicate"
    }

    fn evaluate(&self, recipe: &Recipe, _criteria: &FilterCriteria) -> bool {
        recipe.title.contains(self.0)
    }
}

#[test]
fn test_custom_predicate_composition() {
    let catalog = create_test_catalog();
    let matcher = RecipeMatcher::new()
        .add_predicate(MealTypePredicate)
        .add_predicate(DietaryPredicate)
        .add_predicate(TitlePredicate("Soup"));

    let hits = matcher.filter_all(&catalog, &query(&[("meal_type", "Dinner")]));

    assert_eq!(ids(&hits), vec!["3"]);
    assert_eq!(
        matcher.predicate_names(),
        vec!["MealTypePredicate", "DietaryPredicate", "TitlePredicate"]
    );
}
