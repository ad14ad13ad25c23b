//! Order submission gateway.

use crate::cart::CartEngine;
use crate::checkout::{CustomerInfo, Order, OrderRequest, PaymentMethod};
use crate::error::OrderingError;
use crate::ids::OrderId;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tavola_store::Store;
use tokio::sync::Mutex;

/// Remote order submission service.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit a request; returns the accepted order.
    async fn submit(&self, request: OrderRequest) -> Result<Order, OrderingError>;

    /// Look up a previously accepted order.
    async fn order(&self, id: &OrderId) -> Option<Order>;
}

/// In-process order backend used in place of a remote service.
///
/// Validates the request, optionally simulates a remote round trip,
/// and retains accepted orders for lookup.
pub struct SandboxGateway {
    orders: Mutex<HashMap<OrderId, Order>>,
    latency: Option<Duration>,
}

impl SandboxGateway {
    /// Gateway that responds immediately.
    pub fn new() -> Self {
        Self {
            orders: Mutex::new(HashMap::new()),
            latency: None,
        }
    }

    /// Gateway that sleeps before responding, for a realistic feel.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            orders: Mutex::new(HashMap::new()),
            latency: Some(latency),
        }
    }
}

impl Default for SandboxGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderGateway for SandboxGateway {
    async fn submit(&self, request: OrderRequest) -> Result<Order, OrderingError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        if request.lines.is_empty() {
            return Err(OrderingError::EmptyOrder);
        }
        if let Some(field) = request.customer.missing_field() {
            return Err(OrderingError::MissingCustomerField(field));
        }
        // The kitchen may turn an item off between add and submit.
        if let Some(line) = request.lines.iter().find(|l| !l.item.available) {
            return Err(OrderingError::OrderRejected(format!(
                "{} is no longer available",
                line.item.name
            )));
        }

        let order = Order::accept(request);
        tracing::info!(
            order_number = %order.order_number,
            total = %order.request.grand_total,
            "order accepted"
        );
        self.orders
            .lock()
            .await
            .insert(order.id.clone(), order.clone());
        Ok(order)
    }

    async fn order(&self, id: &OrderId) -> Option<Order> {
        self.orders.lock().await.get(id).cloned()
    }
}

/// The submission flow: snapshot, submit, and clear on success.
///
/// The cart is cleared only after the gateway reports acceptance. Any
/// failure propagates with the cart exactly as it was, ready for a
/// retry.
pub async fn place_order<S, G>(
    engine: &mut CartEngine<S>,
    gateway: &G,
    customer: CustomerInfo,
    payment_method: PaymentMethod,
    notes: Option<String>,
) -> Result<Order, OrderingError>
where
    S: Store,
    G: OrderGateway + ?Sized,
{
    let request = OrderRequest::from_cart(engine.cart(), customer, payment_method, notes);
    let order = gateway.submit(request).await?;
    engine.clear();
    Ok(order)
}
