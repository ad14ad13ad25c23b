//! Cart line type.

use crate::catalog::MenuItem;
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One menu item's entry in the cart.
///
/// Identified by the source item's id; the cart holds at most one line
/// per id. The item's display fields are carried denormalized so a
/// persisted cart renders without a catalog round trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The menu item this line was created from, fields flattened into
    /// the persisted record.
    #[serde(flatten)]
    pub item: MenuItem,
    /// Quantity, always >= 1. A would-be zero is a removal instead.
    pub quantity: i64,
    /// Free-text note for the kitchen, independent of quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

impl CartLine {
    /// Create a line for a freshly added item: quantity 1, no note.
    pub fn new(item: MenuItem) -> Self {
        Self {
            item,
            quantity: 1,
            special_instructions: None,
        }
    }

    /// The id shared with the source menu item.
    pub fn id(&self) -> &ItemId {
        &self.item.id
    }

    /// Line total: unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.item.price * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pizza() -> MenuItem {
        MenuItem::new("1", "Margherita Pizza", Money::new(dec!(16.99)), "Pizza")
    }

    #[test]
    fn test_new_line_has_quantity_one_and_no_note() {
        let line = CartLine::new(pizza());
        assert_eq!(line.quantity, 1);
        assert!(line.special_instructions.is_none());
    }

    #[test]
    fn test_line_total() {
        let mut line = CartLine::new(pizza());
        line.quantity = 3;
        assert_eq!(line.line_total().amount(), dec!(50.97));
    }

    #[test]
    fn test_persisted_record_is_flat() {
        let mut line = CartLine::new(pizza());
        line.special_instructions = Some("extra basil".to_string());

        let json = serde_json::to_value(&line).unwrap();
        // Item fields sit next to quantity and the note, not nested.
        assert_eq!(json["id"], "1");
        assert_eq!(json["price"], "16.99");
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["special_instructions"], "extra basil");

        let back: CartLine = serde_json::from_value(json).unwrap();
        assert_eq!(back, line);
    }
}
