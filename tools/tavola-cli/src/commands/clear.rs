//! Empty the cart.

use anyhow::Result;
use dialoguer::Confirm;

use crate::commands::ClearArgs;
use crate::context::Context;

pub async fn run(args: ClearArgs, ctx: &Context) -> Result<()> {
    let mut engine = ctx.engine()?;

    if engine.cart().is_empty() {
        ctx.output.info("Your cart is already empty");
        return Ok(());
    }

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove all {} items from the cart?",
                engine.cart().item_count()
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.info("Cancelled");
            return Ok(());
        }
    }

    engine.clear();
    ctx.output.success("Cart cleared");
    Ok(())
}
