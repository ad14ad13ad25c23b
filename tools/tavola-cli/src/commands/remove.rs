//! Remove an item from the cart.

use anyhow::Result;
use tavola_ordering::prelude::*;

use crate::commands::RemoveArgs;
use crate::context::Context;

pub async fn run(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let id = ItemId::new(&args.item_id);
    let mut engine = ctx.engine()?;

    // Removing an absent id is a no-op, not an error; only the message
    // differs.
    let known = engine.cart().line(&id).map(|l| l.item.name.clone());
    let cart = engine.remove_item(&id);

    match known {
        Some(name) => ctx.output.success(&format!("Removed {}", name)),
        None => ctx
            .output
            .info(&format!("{} was not in the cart", args.item_id)),
    }
    ctx.output.info(&super::cart::summary(cart));
    Ok(())
}
