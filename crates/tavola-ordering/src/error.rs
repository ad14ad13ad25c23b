//! Ordering error types.

use thiserror::Error;

/// Errors that can occur in ordering operations.
///
/// Cart mutations never produce these: unknown ids are deliberate
/// no-ops and storage failures degrade at the engine boundary. The
/// variants here surface from the catalog and checkout collaborators.
#[derive(Error, Debug)]
pub enum OrderingError {
    /// Menu item not found.
    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    /// Menu item exists but is not currently orderable.
    #[error("Menu item not available: {0}")]
    ItemUnavailable(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Catalog service could not be reached.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Order submitted with no lines.
    #[error("Order must contain at least one item")]
    EmptyOrder,

    /// Required customer contact field is missing.
    #[error("Customer {0} is required")]
    MissingCustomerField(&'static str),

    /// Order was rejected by the submission backend.
    #[error("Order rejected: {0}")]
    OrderRejected(String),

    /// Order submission backend failed.
    #[error("Order gateway error: {0}")]
    GatewayError(String),
}
