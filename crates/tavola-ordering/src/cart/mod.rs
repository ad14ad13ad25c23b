//! Cart pricing and state-transition engine.
//!
//! `Cart` is the pure state value: an ordered line sequence, the
//! delivery fee, and a totals block recomputed as one unit after every
//! mutation. `CartEngine` owns a `Cart` plus a storage backend and
//! wraps each mutation with the best-effort persistence write.

mod cart;
mod engine;
mod line;
mod totals;

pub use cart::{Cart, DEFAULT_DELIVERY_FEE};
pub use engine::{CartEngine, CART_KEY};
pub use line::CartLine;
pub use totals::{CartTotals, TAX_RATE};
