//! CLI execution context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use tavola_ordering::prelude::*;
use tavola_store::FileStore;

use crate::config::CliConfig;
use crate::output::Output;

/// Storage key for the client-side order history.
pub const ORDERS_KEY: &str = "tavola:orders";

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Directory the cart and order history live in.
    cart_dir: PathBuf,
}

impl Context {
    /// Load config and resolve the storage directory.
    pub fn load(cart_dir: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let config = CliConfig::find(&cwd).unwrap_or_default();

        let cart_dir = match cart_dir {
            Some(dir) => PathBuf::from(dir),
            None => match std::env::var_os("TAVOLA_CART_DIR") {
                Some(dir) => PathBuf::from(dir),
                None => data_dir().join("tavola"),
            },
        };

        Ok(Self {
            config,
            output,
            cart_dir,
        })
    }

    /// Open the durable store backing this session.
    pub fn store(&self) -> Result<FileStore> {
        FileStore::open(&self.cart_dir)
            .with_context(|| format!("Failed to open cart storage: {}", self.cart_dir.display()))
    }

    /// Start the session's cart engine: restore the saved cart and
    /// apply the configured delivery fee.
    pub fn engine(&self) -> Result<CartEngine<FileStore>> {
        let mut engine = CartEngine::load(self.store()?);
        if let Some(fee) = self.config.delivery_fee()? {
            self.output
                .debug(&format!("applying configured delivery fee {}", fee));
            engine.set_delivery_fee(fee);
        }
        Ok(engine)
    }

    /// The in-process catalog serving the menu.
    pub fn catalog(&self) -> StaticCatalog {
        StaticCatalog::new()
    }
}

/// Get the platform-specific data directory.
fn data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from("/tmp")
    }
}
