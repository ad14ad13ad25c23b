//! Set or clear an item's special instructions.

use anyhow::Result;
use tavola_ordering::prelude::*;

use crate::commands::NoteArgs;
use crate::context::Context;

pub async fn run(args: NoteArgs, ctx: &Context) -> Result<()> {
    let id = ItemId::new(&args.item_id);
    let text = args.text.join(" ");
    let mut engine = ctx.engine()?;

    let Some(name) = engine.cart().line(&id).map(|l| l.item.name.clone()) else {
        ctx.output
            .info(&format!("{} is not in the cart", args.item_id));
        return Ok(());
    };

    engine.update_special_instructions(&id, text.clone());

    if text.is_empty() {
        ctx.output.success(&format!("Cleared note on {}", name));
    } else {
        ctx.output
            .success(&format!("Note on {}: \"{}\"", name, text));
    }
    Ok(())
}
