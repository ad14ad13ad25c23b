//! The cart engine: a cart plus its persistence round-trip.

use crate::cart::{Cart, CartLine};
use crate::catalog::MenuItem;
use crate::ids::ItemId;
use crate::money::Money;
use tavola_store::{MemoryStore, Store};

/// Fixed storage key the cart is persisted under.
pub const CART_KEY: &str = "tavola:cart";

/// Owns the session's `Cart` and a storage backend.
///
/// One engine per session; collaborators get `&Cart` snapshots and
/// never mutate state directly. Every mutation is followed by a
/// best-effort write of the line sequence under [`CART_KEY`]: a failed
/// write is logged and the in-memory state stays authoritative, so
/// mutations are infallible from the caller's side.
pub struct CartEngine<S: Store = MemoryStore> {
    cart: Cart,
    store: S,
}

impl Default for CartEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CartEngine {
    /// Engine with an empty cart and in-memory storage.
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

impl<S: Store> CartEngine<S> {
    /// Engine with an empty cart on the given backend.
    pub fn with_store(store: S) -> Self {
        Self {
            cart: Cart::new(),
            store,
        }
    }

    /// Start a session: read the saved cart once and restore it.
    ///
    /// A missing or empty saved sequence means a fresh cart. A read or
    /// deserialization failure is logged and treated as "no saved
    /// cart", never a crash.
    pub fn load(store: S) -> Self {
        let mut engine = Self::with_store(store);
        match engine.store.get::<Vec<CartLine>>(CART_KEY) {
            Ok(Some(lines)) if !lines.is_empty() => {
                tracing::debug!(lines = lines.len(), "restoring saved cart");
                engine.cart.restore(lines);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "could not read saved cart, starting empty");
            }
        }
        engine
    }

    /// Snapshot of the current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one of `item`; see [`Cart::add_item`].
    pub fn add_item(&mut self, item: MenuItem) -> &Cart {
        self.cart.add_item(item);
        self.persist();
        &self.cart
    }

    /// Remove the line with `id`; see [`Cart::remove_item`].
    pub fn remove_item(&mut self, id: &ItemId) -> &Cart {
        self.cart.remove_item(id);
        self.persist();
        &self.cart
    }

    /// Set a line's quantity; see [`Cart::update_quantity`].
    pub fn update_quantity(&mut self, id: &ItemId, quantity: i64) -> &Cart {
        self.cart.update_quantity(id, quantity);
        self.persist();
        &self.cart
    }

    /// Replace a line's note; see [`Cart::update_special_instructions`].
    pub fn update_special_instructions(
        &mut self,
        id: &ItemId,
        instructions: impl Into<String>,
    ) -> &Cart {
        self.cart.update_special_instructions(id, instructions);
        self.persist();
        &self.cart
    }

    /// Reset to the empty state; see [`Cart::clear`].
    pub fn clear(&mut self) -> &Cart {
        self.cart.clear();
        self.persist();
        &self.cart
    }

    /// Replace the delivery fee; see [`Cart::set_delivery_fee`].
    pub fn set_delivery_fee(&mut self, fee: Money) -> &Cart {
        self.cart.set_delivery_fee(fee);
        self.persist();
        &self.cart
    }

    /// Best-effort write of the current lines.
    fn persist(&self) {
        if let Err(e) = self.store.set(CART_KEY, &self.cart.lines()) {
            tracing::warn!(error = %e, "could not persist cart, in-memory state stands");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tavola_store::{NoopStore, StoreError};

    fn pizza() -> MenuItem {
        MenuItem::new("1", "Margherita Pizza", Money::new(dec!(16.99)), "Pizza")
    }

    #[test]
    fn test_mutations_persist_lines() {
        let mut engine = CartEngine::new();
        engine.add_item(pizza());
        engine.add_item(pizza());

        let saved: Vec<CartLine> = engine.store.get(CART_KEY).unwrap().unwrap();
        assert_eq!(saved, engine.cart().lines());
        assert_eq!(saved[0].quantity, 2);
    }

    #[test]
    fn test_load_restores_saved_lines() {
        let store = MemoryStore::new();
        {
            let mut engine = CartEngine::with_store(&store);
            engine.add_item(pizza());
            engine.update_special_instructions(&ItemId::new("1"), "extra basil");
        }

        let engine = CartEngine::load(&store);
        assert_eq!(engine.cart().item_count(), 1);
        assert_eq!(engine.cart().subtotal().amount(), dec!(16.99));
        assert_eq!(
            engine
                .cart()
                .line(&ItemId::new("1"))
                .unwrap()
                .special_instructions
                .as_deref(),
            Some("extra basil")
        );
    }

    #[test]
    fn test_load_with_no_saved_cart_starts_empty() {
        let engine = CartEngine::load(MemoryStore::new());
        assert!(engine.cart().is_empty());
    }

    #[test]
    fn test_load_with_corrupt_data_starts_empty() {
        let store = MemoryStore::new();
        store.set_raw(CART_KEY, b"{definitely not cart lines").unwrap();

        let engine = CartEngine::load(store);
        assert!(engine.cart().is_empty());
    }

    #[test]
    fn test_clear_persists_the_empty_state() {
        let store = MemoryStore::new();
        {
            let mut engine = CartEngine::with_store(&store);
            engine.add_item(pizza());
            engine.clear();
        }

        let engine = CartEngine::load(&store);
        assert!(engine.cart().is_empty());
    }

    #[test]
    fn test_write_failure_leaves_in_memory_state_authoritative() {
        struct FailingStore;
        impl Store for FailingStore {
            fn get_raw(&self, _key: &str) -> Result<Option<Vec<u8>>, StoreError> {
                Ok(None)
            }
            fn set_raw(&self, _key: &str, _bytes: &[u8]) -> Result<(), StoreError> {
                Err(StoreError::OpenError("disk gone".to_string()))
            }
            fn delete(&self, _key: &str) -> Result<(), StoreError> {
                Ok(())
            }
            fn exists(&self, _key: &str) -> Result<bool, StoreError> {
                Ok(false)
            }
        }

        let mut engine = CartEngine::with_store(FailingStore);
        let cart = engine.add_item(pizza());
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.grand_total().amount(), dec!(22.3392));
    }

    #[test]
    fn test_noop_store_session_is_purely_in_memory() {
        let mut engine = CartEngine::with_store(NoopStore);
        engine.add_item(pizza());
        assert_eq!(engine.cart().item_count(), 1);

        let engine = CartEngine::load(NoopStore);
        assert!(engine.cart().is_empty());
    }
}
