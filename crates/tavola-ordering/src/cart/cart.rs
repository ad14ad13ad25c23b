//! Cart state and its pure transitions.

use crate::cart::{CartLine, CartTotals};
use crate::catalog::MenuItem;
use crate::ids::ItemId;
use crate::money::Money;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Delivery fee a fresh or cleared cart starts with.
pub const DEFAULT_DELIVERY_FEE: Money = Money::new(dec!(3.99));

/// The cart: an ordered line sequence, a delivery fee, and the totals
/// derived from them.
///
/// Fields are private so the named mutation methods stay the only path
/// into cart state; each one re-derives the totals block before
/// returning, so a caller can never observe stale totals. Unknown ids
/// are no-ops by design, never errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Lines in the order items were first added; stable across
    /// quantity and note updates.
    lines: Vec<CartLine>,
    delivery_fee: Money,
    totals: CartTotals,
}

impl Cart {
    /// Create an empty cart with the default delivery fee.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            delivery_fee: DEFAULT_DELIVERY_FEE,
            totals: CartTotals::empty(DEFAULT_DELIVERY_FEE),
        }
    }

    /// Add one of `item` to the cart.
    ///
    /// If a line with the same id exists its quantity goes up by one
    /// and its note is untouched; otherwise a new quantity-1 line is
    /// appended. Callers check availability before calling; the cart
    /// does not re-check the catalog.
    pub fn add_item(&mut self, item: MenuItem) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.item.id == item.id) {
            existing.quantity += 1;
        } else {
            self.lines.push(CartLine::new(item));
        }
        self.recalculate();
    }

    /// Remove the line with the given id. No-op if absent.
    pub fn remove_item(&mut self, id: &ItemId) {
        self.lines.retain(|l| l.id() != id);
        self.recalculate();
    }

    /// Set a line's quantity exactly (absolute set, not a delta).
    ///
    /// A quantity of zero or less behaves exactly like `remove_item`.
    /// No-op if the id is absent.
    pub fn update_quantity(&mut self, id: &ItemId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id() == id) {
            line.quantity = quantity;
        }
        self.recalculate();
    }

    /// Replace a line's special instructions.
    ///
    /// Empty text clears the note. Totals are unaffected but still
    /// re-derived, keeping every mutation on the same path. No-op if
    /// the id is absent.
    pub fn update_special_instructions(&mut self, id: &ItemId, instructions: impl Into<String>) {
        let instructions = instructions.into();
        if let Some(line) = self.lines.iter_mut().find(|l| l.id() == id) {
            line.special_instructions = if instructions.is_empty() {
                None
            } else {
                Some(instructions)
            };
        }
        self.recalculate();
    }

    /// Reset to the empty state: no lines, default delivery fee.
    ///
    /// The grand total of a cleared cart equals the default fee.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.delivery_fee = DEFAULT_DELIVERY_FEE;
        self.recalculate();
    }

    /// Replace the delivery fee and recompute the grand total.
    ///
    /// A non-negative fee is the caller's precondition; the cart
    /// neither clamps nor rejects.
    pub fn set_delivery_fee(&mut self, fee: Money) {
        self.delivery_fee = fee;
        self.recalculate();
    }

    /// Seed state from persisted lines, re-deriving totals against the
    /// current delivery fee. Used once at session start.
    pub fn restore(&mut self, lines: Vec<CartLine>) {
        self.lines = lines;
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.totals = CartTotals::compute(&self.lines, self.delivery_fee);
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for an item, if present.
    pub fn line(&self, id: &ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id() == id)
    }

    /// Current delivery fee.
    pub fn delivery_fee(&self) -> Money {
        self.delivery_fee
    }

    /// The derived totals block.
    pub fn totals(&self) -> &CartTotals {
        &self.totals
    }

    /// Sum of line totals before tax and delivery.
    pub fn subtotal(&self) -> Money {
        self.totals.subtotal
    }

    /// Tax on the subtotal.
    pub fn tax(&self) -> Money {
        self.totals.tax
    }

    /// The amount charged: subtotal + tax + delivery fee.
    pub fn grand_total(&self) -> Money {
        self.totals.grand_total
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.totals.item_count
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
