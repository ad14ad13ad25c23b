//! Food-ordering domain types and logic for Tavola.
//!
//! This crate provides the client-side core of a food-ordering app:
//!
//! - **Catalog**: Menu items, categories, nutrition facts, lookup service
//! - **Cart**: The cart pricing and state-transition engine
//! - **Checkout**: Customer details, order submission, order lifecycle
//!
//! # Example
//!
//! ```rust,ignore
//! use tavola_ordering::prelude::*;
//! use tavola_store::MemoryStore;
//!
//! // Start a session with an in-memory cart
//! let mut engine = CartEngine::load(MemoryStore::new());
//!
//! // Add an item from the menu
//! let catalog = StaticCatalog::new();
//! let pizza = catalog.items()[0].clone();
//! let cart = engine.add_item(pizza);
//!
//! // Totals are recomputed on every mutation
//! println!("Total: {}", cart.grand_total().display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::OrderingError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::OrderingError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Category, MenuItem, NutritionFacts, StaticCatalog};

    // Cart
    pub use crate::cart::{
        Cart, CartEngine, CartLine, CartTotals, CART_KEY, DEFAULT_DELIVERY_FEE, TAX_RATE,
    };

    // Checkout
    pub use crate::checkout::{
        place_order, CustomerInfo, Order, OrderGateway, OrderRequest, OrderStatus, PaymentMethod,
        SandboxGateway,
    };
}
