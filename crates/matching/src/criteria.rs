//! Query normalization.
//!
//! Turns a raw, multi-valued query string map into a [`FilterCriteria`].
//! Normalization never fails: a missing or odd-looking field simply means
//! "no constraint" for that field.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Raw query parameters, keeping every value of a repeated key.
///
/// Values keep their arrival order within a key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// Every value given for `key`; empty if the key never appeared.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.values.get(key).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Query keys that feed each criteria field.
///
/// Callers name the same fields differently, so each field accepts several
/// keys and merges their values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAliases {
    pub meal_types: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub ingredients: Vec<String>,
}

impl Default for FieldAliases {
    fn default() -> Self {
        Self {
            meal_types: vec!["meal_type".into(), "type".into()],
            dietary_restrictions: vec!["dietary_restriction".into(), "diet".into()],
            ingredients: vec!["ingredients".into(), "includeIngredients".into()],
        }
    }
}

/// Normalized filter request.
///
/// Every field is a set; an empty set means "no constraint". Values keep
/// their original case, since comparisons fold case themselves. Fields are
/// private so a built criteria value cannot change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    meal_types: BTreeSet<String>,
    dietary_restrictions: BTreeSet<String>,
    ingredient_terms: BTreeSet<String>,
}

impl FilterCriteria {
    /// Build criteria directly.
    ///
    /// Ingredient values are split on whitespace like query values are.
    pub fn new<M, D, I>(meal_types: M, dietary_restrictions: D, ingredients: I) -> Self
    where
        M: IntoIterator,
        M::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            meal_types: meal_types.into_iter().map(Into::into).collect(),
            dietary_restrictions: dietary_restrictions.into_iter().map(Into::into).collect(),
            ingredient_terms: split_terms(ingredients),
        }
    }

    /// Criteria that match every recipe.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Normalize raw query parameters using the default key aliases.
    pub fn from_query(params: &QueryParams) -> Self {
        Self::from_query_with(params, &FieldAliases::default())
    }

    /// Normalize raw query parameters using custom key aliases.
    pub fn from_query_with(params: &QueryParams, aliases: &FieldAliases) -> Self {
        let values_for = |keys: &[String]| -> Vec<&String> {
            keys.iter()
                .flat_map(|key| params.get_all(key).iter())
                .collect()
        };

        Self {
            meal_types: values_for(&aliases.meal_types).into_iter().cloned().collect(),
            dietary_restrictions: values_for(&aliases.dietary_restrictions)
                .into_iter()
                .cloned()
                .collect(),
            ingredient_terms: split_terms(values_for(&aliases.ingredients)),
        }
    }

    pub fn with_meal_types<M>(mut self, meal_types: M) -> Self
    where
        M: IntoIterator,
        M::Item: Into<String>,
    {
        self.meal_types = meal_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dietary_restrictions<D>(mut self, restrictions: D) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
    {
        self.dietary_restrictions = restrictions.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the ingredient terms; values are split on whitespace.
    pub fn with_ingredients<I>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.ingredient_terms = split_terms(ingredients);
        self
    }

    pub fn meal_types(&self) -> &BTreeSet<String> {
        &self.meal_types
    }

    pub fn dietary_restrictions(&self) -> &BTreeSet<String> {
        &self.dietary_restrictions
    }

    pub fn ingredient_terms(&self) -> &BTreeSet<String> {
        &self.ingredient_terms
    }

    /// True when no field constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        self.meal_types.is_empty()
            && self.dietary_restrictions.is_empty()
            && self.ingredient_terms.is_empty()
    }
}

fn split_terms<I>(values: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    values
        .into_iter()
        .flat_map(|value| {
            value
                .as_ref()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}
