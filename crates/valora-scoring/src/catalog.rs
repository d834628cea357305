//! Externally supplied category catalogs.

use std::collections::HashSet;

use valora_core::models::category::CategoryConfig;

use crate::error::ScoringError;

/// Parse a JSON array of category configurations and validate it.
pub fn parse_categories(json: &str) -> Result<Vec<CategoryConfig>, ScoringError> {
    let categories: Vec<CategoryConfig> = serde_json::from_str(json)?;
    validate_categories(&categories)?;
    Ok(categories)
}

/// Reject duplicate category keys, duplicate items within a category and
/// categories without items. Items shared between categories are allowed.
pub fn validate_categories(categories: &[CategoryConfig]) -> Result<(), ScoringError> {
    let mut keys = HashSet::new();
    for category in categories {
        if !keys.insert(category.key.as_str()) {
            tracing::warn!(category = %category.key, "duplicate category key");
            return Err(ScoringError::DuplicateCategory(category.key.clone()));
        }
        if category.items.is_empty() {
            tracing::warn!(category = %category.key, "category without items");
            return Err(ScoringError::EmptyCategory(category.key.clone()));
        }
        let mut items = HashSet::new();
        for item in &category.items {
            if !items.insert(item.as_str()) {
                tracing::warn!(category = %category.key, item = %item, "duplicate item");
                return Err(ScoringError::DuplicateItem {
                    category: category.key.clone(),
                    item: item.clone(),
                });
            }
        }
    }
    Ok(())
}
