//! Type-safe key-value persistence layer for Tavola.
//!
//! Provides a simple, ergonomic API for persisting client state with
//! automatic JSON serialization, plus interchangeable backends: a
//! file-backed store for durable sessions, an in-memory store for tests,
//! and a no-op store for platforms without local storage.
//!
//! # Example
//!
//! ```rust,ignore
//! use tavola_store::{FileStore, Store};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct SavedCart {
//!     lines: Vec<SavedLine>,
//! }
//!
//! let store = FileStore::open("~/.local/share/tavola")?;
//!
//! // Store a value
//! store.set("tavola:cart", &cart)?;
//!
//! // Retrieve a value
//! let cart: Option<SavedCart> = store.get("tavola:cart")?;
//!
//! // Delete a value
//! store.delete("tavola:cart")?;
//! ```

mod error;
mod file;
mod memory;
mod noop;
mod store;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use noop::NoopStore;
pub use store::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, MemoryStore, NoopStore, Store, StoreError};
}
