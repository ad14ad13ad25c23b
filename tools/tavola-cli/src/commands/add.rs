//! Add an item to the cart.

use anyhow::Result;
use tavola_ordering::prelude::*;

use crate::commands::AddArgs;
use crate::context::Context;

pub async fn run(args: AddArgs, ctx: &Context) -> Result<()> {
    let id = ItemId::new(&args.item_id);

    let item = ctx
        .catalog()
        .item(&id)
        .await?
        .ok_or_else(|| OrderingError::ItemNotFound(args.item_id.clone()))?;

    // Availability is the caller's check; the engine trusts its input.
    if !item.available {
        return Err(OrderingError::ItemUnavailable(item.name).into());
    }

    let mut engine = ctx.engine()?;
    let name = item.name.clone();
    let cart = engine.add_item(item);

    let quantity = cart.line(&id).map(|l| l.quantity).unwrap_or(0);
    ctx.output
        .success(&format!("Added {} (x{} in cart)", name, quantity));
    ctx.output.info(&super::cart::summary(cart));
    Ok(())
}
