//! Identifier newtypes for the ordering domain.
//!
//! Menu items, categories, and orders are all keyed by opaque strings
//! (the sample menu uses `"1"`..`"12"`). Distinct wrapper types keep a
//! category key from ever standing in for an item key, which matters
//! because cart mutations treat an unknown item id as a silent no-op.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

id_type!(ItemId, "Key of a menu item; assigned by the catalog.");
id_type!(CategoryId, "Key of a menu category; assigned by the catalog.");
id_type!(OrderId, "Key of a placed order; assigned at submission.");

impl OrderId {
    /// Mint an id for a newly accepted order.
    ///
    /// Item and category ids come from the catalog; orders are the one
    /// entity created on this side. Millisecond timestamp plus a
    /// process-wide sequence number keeps ids unique within a session
    /// and sortable by creation time.
    pub fn generate() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        use std::time::{SystemTime, UNIX_EPOCH};

        static SEQUENCE: AtomicU64 = AtomicU64::new(0);

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("{millis:x}-{seq:04x}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_wrap_their_key_unchanged() {
        let id = ItemId::new("12");
        assert_eq!(id.as_str(), "12");
        assert_eq!(id.to_string(), "12");
        assert_eq!(ItemId::from("12"), id);
    }

    #[test]
    fn test_minted_order_ids_do_not_collide() {
        let a = OrderId::generate();
        let b = OrderId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_ids_serialize_as_bare_strings() {
        let id = CategoryId::new("3");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"3\"");
        let back: CategoryId = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(back, id);
    }
}
