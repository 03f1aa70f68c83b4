//! Predicate implementations, one per criteria field.
//!
//! Meal type and dietary restriction accept any one of the requested values;
//! ingredients require all requested terms.

pub mod dietary;
pub mod ingredients;
pub mod meal_type;

// Re-export for convenience
pub use dietary::DietaryPredicate;
pub use ingredients::IngredientPredicate;
pub use meal_type::MealTypePredicate;
