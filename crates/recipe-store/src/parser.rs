//! Parser for recipe store files.
//!
//! A store file holds one JSON array of recipe documents. An empty (or
//! whitespace-only) file is an empty collection, so a freshly created store
//! can be reopened without ever having been written.

use crate::error::{Result, StoreError};
use crate::types::Recipe;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a store file into recipes, in file order.
pub fn parse_recipes(path: &Path) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)?;
    parse_recipes_str(&content, &path.display().to_string())
}

/// Parse the contents of a store file.
///
/// `file` is only used to label errors.
pub fn parse_recipes_str(content: &str, file: &str) -> Result<Vec<Recipe>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(content).map_err(|e| StoreError::ParseError {
        file: file.to_string(),
        line: e.line(),
        reason: e.to_string(),
    })
}

/// Check that no two recipes share a non-empty id.
pub fn validate_unique_ids(recipes: &[Recipe]) -> Result<()> {
    let mut seen = HashSet::with_capacity(recipes.len());
    for recipe in recipes.iter().filter(|r| !r.id.is_empty()) {
        if !seen.insert(recipe.id.as_str()) {
            return Err(StoreError::ValidationError(format!(
                "duplicate recipe id {}",
                recipe.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_is_empty_collection() {
        assert!(parse_recipes_str("", "recipes.json").unwrap().is_empty());
        assert!(parse_recipes_str("  \n", "recipes.json").unwrap().is_empty());
        assert!(parse_recipes_str("[]", "recipes.json").unwrap().is_empty());
    }

    #[test]
    fn test_parse_keeps_file_order() {
        let json = r#"[
            {"id": 1, "title": "Pizza", "dishTypes": ["Dinner"]},
            {"id": "2", "title": "Muffins", "dishTypes": "Breakfast"}
        ]"#;

        let recipes = parse_recipes_str(json, "recipes.json").unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].title, "Pizza");
        assert_eq!(recipes[1].id, "2");
    }

    #[test]
    fn test_parse_error_reports_line() {
        let json = "[\n  {\"title\": \"Broken\",\n  }\n]";
        match parse_recipes_str(json, "recipes.json") {
            Err(StoreError::ParseError { file, line, .. }) => {
                assert_eq!(file, "recipes.json");
                assert_eq!(line, 3);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_unique_ids() {
        let ok = vec![Recipe::new("a").with_id("1"), Recipe::new("b"), Recipe::new("c")];
        assert!(validate_unique_ids(&ok).is_ok());

        let dup = vec![Recipe::new("a").with_id("1"), Recipe::new("b").with_id("1")];
        assert!(validate_unique_ids(&dup).is_err());
    }
}
