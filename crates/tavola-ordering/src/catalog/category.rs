//! Menu category type.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A menu grouping (e.g., "Pizza", "Desserts").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name, also the label matched by item filters.
    pub name: String,
    /// Short description for the category tile.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Position in the menu (ascending).
    pub sort_order: u32,
}

impl Category {
    /// Create a new category.
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        description: impl Into<String>,
        sort_order: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            image: String::new(),
            sort_order,
        }
    }
}
