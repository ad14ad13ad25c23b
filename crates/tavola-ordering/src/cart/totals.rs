//! Derived cart totals.

use crate::cart::CartLine;
use crate::money::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Flat tax rate applied to the subtotal.
pub const TAX_RATE: Decimal = dec!(0.08);

/// The derived pricing block for a cart.
///
/// Never mutated directly: all four values are recomputed together
/// from the full line set after every cart mutation, so a totals block
/// is always consistent with the lines it was computed from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of line totals before tax and delivery.
    pub subtotal: Money,
    /// `subtotal * TAX_RATE`.
    pub tax: Money,
    /// `subtotal + tax + delivery_fee`, the amount charged.
    pub grand_total: Money,
    /// Sum of line quantities.
    pub item_count: i64,
}

impl CartTotals {
    /// Compute totals from scratch for the given lines and fee.
    ///
    /// Always a full re-derivation, never an incremental patch, so a
    /// given line set produces identical totals regardless of the
    /// mutation history that led to it.
    pub fn compute(lines: &[CartLine], delivery_fee: Money) -> Self {
        let subtotal: Money = lines.iter().map(|line| line.line_total()).sum();
        let tax = subtotal * TAX_RATE;
        let grand_total = subtotal + tax + delivery_fee;
        let item_count = lines.iter().map(|line| line.quantity).sum();
        Self {
            subtotal,
            tax,
            grand_total,
            item_count,
        }
    }

    /// Totals for an empty cart: everything zero except the fee.
    pub fn empty(delivery_fee: Money) -> Self {
        Self::compute(&[], delivery_fee)
    }
}
