//! Checkout module.
//!
//! Contains customer and payment types, the order request snapshot,
//! the order lifecycle, and the submission gateway.

mod customer;
mod gateway;
mod order;

pub use customer::{CustomerInfo, PaymentMethod};
pub use gateway::{place_order, OrderGateway, SandboxGateway};
pub use order::{Order, OrderRequest, OrderStatus, ESTIMATED_DELIVERY_MINUTES};
