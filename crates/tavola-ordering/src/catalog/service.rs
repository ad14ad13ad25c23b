//! Catalog lookup service.
//!
//! The lookup trait models a remote menu service; `StaticCatalog`
//! serves the built-in sample menu in-process behind the same
//! interface.

use crate::catalog::{Category, MenuItem, NutritionFacts};
use crate::error::OrderingError;
use crate::ids::ItemId;
use crate::money::Money;
use async_trait::async_trait;
use rust_decimal_macros::dec;

/// Read-only menu lookup.
///
/// Implementations may go over the network; the default methods derive
/// filtered views from `menu()` so a backend only has to supply the
/// two listing calls.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// All menu items, available or not.
    async fn menu(&self) -> Result<Vec<MenuItem>, OrderingError>;

    /// All categories, sorted by `sort_order`.
    async fn categories(&self) -> Result<Vec<Category>, OrderingError>;

    /// Items in a category, matched case-insensitively by label.
    async fn items_in_category(&self, label: &str) -> Result<Vec<MenuItem>, OrderingError> {
        let items = self.menu().await?;
        Ok(items.into_iter().filter(|i| i.in_category(label)).collect())
    }

    /// Look up a single item by id.
    async fn item(&self, id: &ItemId) -> Result<Option<MenuItem>, OrderingError> {
        let items = self.menu().await?;
        Ok(items.into_iter().find(|i| &i.id == id))
    }
}

/// In-process catalog seeded with a fixed menu.
pub struct StaticCatalog {
    items: Vec<MenuItem>,
    categories: Vec<Category>,
}

impl StaticCatalog {
    /// Catalog serving the built-in sample menu.
    pub fn new() -> Self {
        Self {
            items: sample_menu(),
            categories: sample_categories(),
        }
    }

    /// Catalog serving the given data.
    pub fn with_data(items: Vec<MenuItem>, mut categories: Vec<Category>) -> Self {
        categories.sort_by_key(|c| c.sort_order);
        Self { items, categories }
    }

    /// Direct access to the items, for synchronous callers.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn menu(&self) -> Result<Vec<MenuItem>, OrderingError> {
        Ok(self.items.clone())
    }

    async fn categories(&self) -> Result<Vec<Category>, OrderingError> {
        Ok(self.categories.clone())
    }
}

/// The built-in sample menu.
pub fn sample_menu() -> Vec<MenuItem> {
    fn item(
        id: &str,
        name: &str,
        description: &str,
        price: Money,
        category: &str,
        prep: u32,
        ingredients: &[&str],
        nutrition: NutritionFacts,
    ) -> MenuItem {
        MenuItem {
            id: ItemId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            price,
            image: String::new(),
            category: category.to_string(),
            available: true,
            preparation_minutes: Some(prep),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            nutrition: Some(nutrition),
        }
    }

    vec![
        item(
            "1",
            "Margherita Pizza",
            "Classic Italian pizza with fresh tomatoes, mozzarella di bufala, fresh basil, and extra virgin olive oil on a wood-fired crust",
            Money::new(dec!(16.99)),
            "Pizza",
            15,
            &["Tomato sauce", "Mozzarella", "Fresh basil", "Olive oil"],
            NutritionFacts { calories: 280, protein: 12, carbs: 36, fat: 10 },
        ),
        item(
            "2",
            "Truffle Mushroom Pizza",
            "Gourmet pizza with wild mushrooms, truffle oil, caramelized onions, and aged parmesan on a crispy thin crust",
            Money::new(dec!(24.99)),
            "Pizza",
            18,
            &["Wild mushrooms", "Truffle oil", "Caramelized onions", "Parmesan"],
            NutritionFacts { calories: 320, protein: 14, carbs: 38, fat: 14 },
        ),
        item(
            "3",
            "Gourmet Chicken Burger",
            "Premium grilled chicken breast with avocado, bacon, aged cheddar, lettuce, tomato, and chipotle mayo on a brioche bun",
            Money::new(dec!(18.99)),
            "Burgers",
            12,
            &["Chicken breast", "Avocado", "Bacon", "Cheddar", "Chipotle mayo"],
            NutritionFacts { calories: 580, protein: 35, carbs: 42, fat: 28 },
        ),
        item(
            "4",
            "Wagyu Beef Burger",
            "Premium wagyu beef patty with caramelized onions, swiss cheese, arugula, and truffle aioli on an artisan bun",
            Money::new(dec!(28.99)),
            "Burgers",
            15,
            &["Wagyu beef", "Swiss cheese", "Arugula", "Truffle aioli"],
            NutritionFacts { calories: 650, protein: 42, carbs: 38, fat: 35 },
        ),
        item(
            "5",
            "Mediterranean Caesar Salad",
            "Fresh romaine hearts with house-made caesar dressing, aged parmesan, herb croutons, and grilled chicken",
            Money::new(dec!(14.99)),
            "Salads",
            8,
            &["Romaine lettuce", "Parmesan", "Croutons", "Caesar dressing"],
            NutritionFacts { calories: 280, protein: 25, carbs: 18, fat: 15 },
        ),
        item(
            "6",
            "Quinoa Power Bowl",
            "Superfood bowl with quinoa, roasted vegetables, avocado, chickpeas, feta cheese, and tahini dressing",
            Money::new(dec!(16.99)),
            "Salads",
            10,
            &["Quinoa", "Roasted vegetables", "Avocado", "Chickpeas", "Feta"],
            NutritionFacts { calories: 420, protein: 18, carbs: 52, fat: 18 },
        ),
        item(
            "7",
            "Truffle Carbonara",
            "Handmade fettuccine with pancetta, egg yolk, aged pecorino romano, black pepper, and truffle oil",
            Money::new(dec!(22.99)),
            "Pasta",
            14,
            &["Fettuccine", "Pancetta", "Pecorino romano", "Truffle oil"],
            NutritionFacts { calories: 520, protein: 22, carbs: 58, fat: 24 },
        ),
        item(
            "8",
            "Seafood Linguine",
            "Fresh linguine with prawns, scallops, mussels, cherry tomatoes, white wine, and fresh herbs",
            Money::new(dec!(26.99)),
            "Pasta",
            16,
            &["Linguine", "Prawns", "Scallops", "Mussels", "White wine"],
            NutritionFacts { calories: 480, protein: 32, carbs: 54, fat: 16 },
        ),
        item(
            "9",
            "Pan-Seared Salmon",
            "Atlantic salmon with lemon herb butter, roasted asparagus, and garlic mashed potatoes",
            Money::new(dec!(24.99)),
            "Seafood",
            18,
            &["Atlantic salmon", "Lemon herb butter", "Asparagus", "Potatoes"],
            NutritionFacts { calories: 450, protein: 38, carbs: 28, fat: 22 },
        ),
        item(
            "10",
            "Grilled Sea Bass",
            "Mediterranean sea bass with olive tapenade, roasted vegetables, and saffron rice",
            Money::new(dec!(28.99)),
            "Seafood",
            20,
            &["Sea bass", "Olive tapenade", "Roasted vegetables", "Saffron rice"],
            NutritionFacts { calories: 380, protein: 35, carbs: 32, fat: 14 },
        ),
        item(
            "11",
            "Chocolate Lava Cake",
            "Warm chocolate cake with molten center, vanilla ice cream, and fresh berries",
            Money::new(dec!(9.99)),
            "Desserts",
            12,
            &["Dark chocolate", "Vanilla ice cream", "Fresh berries"],
            NutritionFacts { calories: 420, protein: 6, carbs: 52, fat: 22 },
        ),
        item(
            "12",
            "Tiramisu",
            "Classic Italian dessert with mascarpone, espresso-soaked ladyfingers, and cocoa powder",
            Money::new(dec!(8.99)),
            "Desserts",
            5,
            &["Mascarpone", "Ladyfingers", "Espresso", "Cocoa powder"],
            NutritionFacts { calories: 320, protein: 8, carbs: 28, fat: 20 },
        ),
    ]
}

/// The built-in sample categories, in menu order.
pub fn sample_categories() -> Vec<Category> {
    vec![
        Category::new("1", "Pizza", "Wood-fired artisan pizzas", 1),
        Category::new("2", "Burgers", "Gourmet burgers & sandwiches", 2),
        Category::new("3", "Salads", "Fresh & healthy options", 3),
        Category::new("4", "Pasta", "Handmade pasta dishes", 4),
        Category::new("5", "Seafood", "Fresh catch of the day", 5),
        Category::new("6", "Desserts", "Sweet endings", 6),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_menu_has_every_category_covered() {
        let catalog = StaticCatalog::new();
        let categories = catalog.categories().await.unwrap();
        for category in &categories {
            let items = catalog.items_in_category(&category.name).await.unwrap();
            assert!(!items.is_empty(), "no items in {}", category.name);
        }
    }

    #[tokio::test]
    async fn test_category_filter_is_case_insensitive() {
        let catalog = StaticCatalog::new();
        let lower = catalog.items_in_category("pizza").await.unwrap();
        let upper = catalog.items_in_category("PIZZA").await.unwrap();
        assert_eq!(lower.len(), 2);
        assert_eq!(lower, upper);
    }

    #[tokio::test]
    async fn test_item_lookup() {
        let catalog = StaticCatalog::new();

        let found = catalog.item(&ItemId::new("1")).await.unwrap();
        assert_eq!(found.unwrap().name, "Margherita Pizza");

        let missing = catalog.item(&ItemId::new("999")).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_backend_failure_propagates_through_derived_views() {
        struct OfflineCatalog;

        #[async_trait]
        impl Catalog for OfflineCatalog {
            async fn menu(&self) -> Result<Vec<MenuItem>, OrderingError> {
                Err(OrderingError::CatalogUnavailable("connection refused".to_string()))
            }

            async fn categories(&self) -> Result<Vec<Category>, OrderingError> {
                Err(OrderingError::CatalogUnavailable("connection refused".to_string()))
            }
        }

        let err = OfflineCatalog.item(&ItemId::new("1")).await.unwrap_err();
        assert!(matches!(err, OrderingError::CatalogUnavailable(_)));

        let err = OfflineCatalog.items_in_category("Pizza").await.unwrap_err();
        assert!(matches!(err, OrderingError::CatalogUnavailable(_)));
    }

    #[tokio::test]
    async fn test_categories_are_sorted() {
        let catalog = StaticCatalog::new();
        let categories = catalog.categories().await.unwrap();
        let orders: Vec<u32> = categories.iter().map(|c| c.sort_order).collect();
        let mut sorted = orders.clone();
        sorted.sort_unstable();
        assert_eq!(orders, sorted);
    }
}
