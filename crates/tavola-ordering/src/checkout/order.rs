//! Order request snapshot and order lifecycle types.

use crate::cart::{Cart, CartLine};
use crate::checkout::{CustomerInfo, PaymentMethod};
use crate::ids::OrderId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Minutes from acceptance to the estimated delivery time.
pub const ESTIMATED_DELIVERY_MINUTES: i64 = 30;

/// Order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting confirmation.
    #[default]
    Pending,
    /// Order confirmed by the restaurant.
    Confirmed,
    /// Kitchen is preparing the order.
    Preparing,
    /// Ready for pickup or out for delivery.
    Ready,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if the order can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Confirmed | OrderStatus::Preparing
        )
    }
}

/// The payload submitted to the order gateway.
///
/// A read-only snapshot of the cart at submission time plus the
/// customer's checkout input; building one never mutates the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    /// Cart lines at submission time.
    pub lines: Vec<CartLine>,
    /// Subtotal at submission time.
    pub subtotal: Money,
    /// Tax at submission time.
    pub tax: Money,
    /// Delivery fee at submission time.
    pub delivery_fee: Money,
    /// The amount to charge.
    pub grand_total: Money,
    /// Customer contact details.
    pub customer: CustomerInfo,
    /// Selected payment method.
    pub payment_method: PaymentMethod,
    /// Free-text note for the whole order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OrderRequest {
    /// Snapshot the cart with the customer's checkout input.
    pub fn from_cart(
        cart: &Cart,
        customer: CustomerInfo,
        payment_method: PaymentMethod,
        notes: Option<String>,
    ) -> Self {
        Self {
            lines: cart.lines().to_vec(),
            subtotal: cart.subtotal(),
            tax: cart.tax(),
            delivery_fee: cart.delivery_fee(),
            grand_total: cart.grand_total(),
            customer,
            payment_method,
            notes,
        }
    }

    /// Total item count across the snapshot.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// An accepted order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// The submitted payload.
    pub request: OrderRequest,
    /// Current status.
    pub status: OrderStatus,
    /// Unix timestamp of acceptance.
    pub created_at: i64,
    /// Unix timestamp of the delivery estimate.
    pub estimated_delivery_at: i64,
}

impl Order {
    /// Accept a request: assign identifiers and timestamps.
    pub fn accept(request: OrderRequest) -> Self {
        let now = current_timestamp();
        Self {
            id: OrderId::generate(),
            order_number: Self::generate_order_number(),
            request,
            status: OrderStatus::Pending,
            created_at: now,
            estimated_delivery_at: now + ESTIMATED_DELIVERY_MINUTES * 60,
        }
    }

    /// Generate a new order number.
    pub fn generate_order_number() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        format!("ORD-{}", ts)
    }

    /// Cancel the order if its status still allows it.
    pub fn cancel(&mut self) -> bool {
        if !self.status.can_cancel() {
            return false;
        }
        self.status = OrderStatus::Cancelled;
        true
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
