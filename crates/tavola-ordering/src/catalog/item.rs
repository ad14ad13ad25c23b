//! Menu item types.

use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A menu entry available for ordering.
///
/// Owned by the catalog collaborator; the cart engine only reads it
/// and trusts id/name/price as given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Unique item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Full description for the item page.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Category label (e.g., "Pizza").
    pub category: String,
    /// Whether the item can currently be ordered.
    pub available: bool,
    /// Preparation time in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation_minutes: Option<u32>,
    /// Headline ingredients.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
    /// Nutrition facts, when published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionFacts>,
}

impl MenuItem {
    /// Create a new available item with just the required fields.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image: String::new(),
            category: category.into(),
            available: true,
            preparation_minutes: None,
            ingredients: Vec::new(),
            nutrition: None,
        }
    }

    /// Check if the item is in the given category (case-insensitive).
    pub fn in_category(&self, label: &str) -> bool {
        self.category.eq_ignore_ascii_case(label)
    }
}

/// Per-serving nutrition facts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionFacts {
    /// Calories per serving.
    pub calories: u32,
    /// Protein in grams.
    pub protein: u32,
    /// Carbohydrates in grams.
    pub carbs: u32,
    /// Fat in grams.
    pub fat: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_in_category_is_case_insensitive() {
        let item = MenuItem::new("1", "Margherita Pizza", Money::new(dec!(16.99)), "Pizza");
        assert!(item.in_category("pizza"));
        assert!(item.in_category("Pizza"));
        assert!(!item.in_category("Desserts"));
    }

    #[test]
    fn test_optional_fields_are_omitted_from_json() {
        let item = MenuItem::new("1", "Margherita Pizza", Money::new(dec!(16.99)), "Pizza");
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("nutrition"));
        assert!(!json.contains("ingredients"));

        let back: MenuItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
