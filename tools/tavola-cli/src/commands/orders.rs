//! Show past orders.

use anyhow::Result;
use console::style;
use tavola_ordering::prelude::*;
use tavola_store::Store;

use crate::commands::OrdersArgs;
use crate::context::{Context, ORDERS_KEY};

pub async fn run(args: OrdersArgs, ctx: &Context) -> Result<()> {
    let store = ctx.store()?;
    let history: Vec<Order> = store.get(ORDERS_KEY)?.unwrap_or_default();

    if history.is_empty() {
        ctx.output.info("No orders yet");
        return Ok(());
    }

    let shown: Vec<&Order> = match args.limit {
        Some(limit) => history.iter().rev().take(limit).collect(),
        None => history.iter().rev().collect(),
    };

    ctx.output.header("Your orders");
    for order in shown {
        let placed = super::checkout::local_time(order.created_at)
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!(
            "  {}  {}  {:>9}  {} items  {}",
            style(&order.order_number).bold(),
            placed,
            order.request.grand_total.display(),
            order.request.item_count(),
            style(order.status.display_name()).dim()
        );
    }
    Ok(())
}
