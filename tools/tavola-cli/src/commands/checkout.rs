//! Submit the order.

use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Local};
use dialoguer::Confirm;
use tavola_ordering::prelude::*;
use tavola_store::Store;

use crate::commands::CheckoutArgs;
use crate::context::{Context, ORDERS_KEY};

pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let payment = PaymentMethod::from_str(&args.payment)
        .ok_or_else(|| anyhow::anyhow!("Unknown payment method: {}", args.payment))?;

    let mut engine = ctx.engine()?;
    let cart = engine.cart();

    if cart.is_empty() {
        return Err(OrderingError::EmptyOrder.into());
    }

    if let Some(minimum) = ctx.config.minimum_order()? {
        if cart.subtotal() < minimum {
            ctx.output.warn(&format!(
                "Subtotal {} is below the {} minimum order",
                cart.subtotal().display(),
                minimum.display()
            ));
        }
    }

    ctx.output.header("Order summary");
    for line in cart.lines() {
        ctx.output.list_item(&format!(
            "{} x{} - {}",
            line.item.name,
            line.quantity,
            line.line_total().display()
        ));
    }
    ctx.output.blank();
    super::cart::render_totals(cart);
    ctx.output.blank();
    ctx.output.kv("Name", &args.name);
    ctx.output.kv("Phone", &args.phone);
    if let Some(address) = &args.address {
        ctx.output.kv("Address", address);
    }
    ctx.output.kv("Payment", payment.display_name());

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Place order for {}?", cart.grand_total().display()))
            .default(true)
            .interact()?;
        if !confirmed {
            ctx.output.info("Cancelled, cart unchanged");
            return Ok(());
        }
    }

    let mut customer = CustomerInfo::new(&args.name, &args.phone);
    customer.email = args.email.clone();
    customer.address = args.address.clone();

    let gateway = SandboxGateway::with_latency(Duration::from_millis(600));
    let spinner = ctx.output.spinner("Placing your order...");
    let result = place_order(&mut engine, &gateway, customer, payment, args.notes.clone()).await;
    spinner.finish_and_clear();

    // Failure leaves the cart exactly as it was, ready for retry.
    let order = result?;

    // The order is placed; a failed history write must not report the
    // checkout as failed.
    if let Err(e) = record_receipt(ctx, &order) {
        ctx.output
            .warn(&format!("Could not record order history: {:#}", e));
    }

    ctx.output
        .success(&format!("Order {} placed", order.order_number));
    ctx.output.kv("Order id", order.id.as_str());
    ctx.output
        .kv("Total", &order.request.grand_total.display());
    if let Some(eta) = local_time(order.estimated_delivery_at) {
        ctx.output
            .kv("Estimated delivery", &eta.format("%H:%M").to_string());
    }
    Ok(())
}

/// Append the accepted order to the client-side history.
fn record_receipt(ctx: &Context, order: &Order) -> Result<()> {
    let store = ctx.store()?;
    let mut history: Vec<Order> = store.get(ORDERS_KEY)?.unwrap_or_default();
    history.push(order.clone());
    store.set(ORDERS_KEY, &history)?;
    Ok(())
}

pub(super) fn local_time(timestamp: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp(timestamp, 0).map(|utc| utc.with_timezone(&Local))
}
