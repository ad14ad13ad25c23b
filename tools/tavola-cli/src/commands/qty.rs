//! Set an item's quantity.

use anyhow::Result;
use tavola_ordering::prelude::*;

use crate::commands::QtyArgs;
use crate::context::Context;

pub async fn run(args: QtyArgs, ctx: &Context) -> Result<()> {
    let id = ItemId::new(&args.item_id);
    let mut engine = ctx.engine()?;

    let known = engine.cart().line(&id).map(|l| l.item.name.clone());
    let cart = engine.update_quantity(&id, args.quantity);

    match (known, args.quantity) {
        (Some(name), q) if q <= 0 => ctx.output.success(&format!("Removed {}", name)),
        (Some(name), q) => ctx.output.success(&format!("{} x{}", name, q)),
        (None, _) => ctx
            .output
            .info(&format!("{} is not in the cart", args.item_id)),
    }
    ctx.output.info(&super::cart::summary(cart));
    Ok(())
}
