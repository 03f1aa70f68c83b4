//! Core domain types for the recipe catalog.
//!
//! The JSON shape follows the documents the recipe book has always stored:
//! `image` for the photo URL, `dishTypes` for meal types and
//! `dietary_restriction` for dietary tags. Older writers disagree on a few
//! details, so decoding is lenient:
//! - `id` may be a JSON string or an integer (always held as a string)
//! - `dishTypes` may be a single string or an array
//! - list fields may be `null` or missing

use crate::error::StoreError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque recipe identifier.
pub type RecipeId = String;

/// A saved recipe.
///
/// Records are immutable while a filter request reads them; the store owns
/// them and hands out clones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, deserialize_with = "id_from_string_or_int")]
    pub id: RecipeId,
    #[serde(default)]
    pub title: String,
    /// Ingredient lines, in recipe order
    #[serde(default, deserialize_with = "string_list")]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    #[serde(rename = "image", default)]
    pub photo_url: String,
    #[serde(rename = "dishTypes", default, deserialize_with = "string_list")]
    pub meal_types: Vec<String>,
    #[serde(rename = "dietary_restriction", default, deserialize_with = "string_list")]
    pub dietary_restrictions: Vec<String>,
}

impl Recipe {
    /// Start a recipe with only a title; everything else empty.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<RecipeId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_meal_types<I, S>(mut self, meal_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meal_types = meal_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dietary_restrictions<I, S>(mut self, restrictions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dietary_restrictions = restrictions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = url.into();
        self
    }

    /// Exact, case-sensitive equality on one field.
    ///
    /// List fields match when any element equals `value`.
    pub fn field_equals(&self, field: RecipeField, value: &str) -> bool {
        match field {
            RecipeField::Id => self.id == value,
            RecipeField::Title => self.title == value,
            RecipeField::MealType => self.meal_types.iter().any(|m| m == value),
            RecipeField::DietaryRestriction => {
                self.dietary_restrictions.iter().any(|d| d == value)
            }
            RecipeField::Ingredient => self.ingredients.iter().any(|i| i == value),
        }
    }
}

/// Fields usable in an equality lookup against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeField {
    Id,
    Title,
    MealType,
    DietaryRestriction,
    Ingredient,
}

impl RecipeField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeField::Id => "id",
            RecipeField::Title => "title",
            RecipeField::MealType => "meal_type",
            RecipeField::DietaryRestriction => "dietary_restriction",
            RecipeField::Ingredient => "ingredient",
        }
    }
}

impl fmt::Display for RecipeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecipeField {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(RecipeField::Id),
            "title" => Ok(RecipeField::Title),
            "meal_type" => Ok(RecipeField::MealType),
            "dietary_restriction" => Ok(RecipeField::DietaryRestriction),
            "ingredient" => Ok(RecipeField::Ingredient),
            _ => Err(StoreError::InvalidValue {
                field: "field".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Lenient decoding helpers
// =============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

fn id_from_string_or_int<'de, D>(deserializer: D) -> Result<RecipeId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(s)) => s,
        Some(RawId::Signed(n)) => n.to_string(),
        Some(RawId::Unsigned(n)) => n.to_string(),
        None => String::new(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<String>),
    One(String),
}

fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::Many(values)) => values,
        Some(OneOrMany::One(value)) if value.trim().is_empty() => Vec::new(),
        Some(OneOrMany::One(value)) => vec![value],
        None => Vec::new(),
    })
}
