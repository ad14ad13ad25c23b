//! Menu catalog module.
//!
//! Contains menu item and category types plus the lookup service the
//! cart engine's callers use to resolve items before adding them.

mod category;
mod item;
mod service;

pub use category::Category;
pub use item::{MenuItem, NutritionFacts};
pub use service::{sample_categories, sample_menu, Catalog, StaticCatalog};
