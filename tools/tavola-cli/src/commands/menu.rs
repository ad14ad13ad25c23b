//! Browse the menu.

use anyhow::Result;
use console::style;
use tavola_ordering::prelude::*;

use crate::commands::MenuArgs;
use crate::context::Context;
use crate::output::availability_badge;

pub async fn run(args: MenuArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();

    match args.category {
        Some(label) => {
            let items = catalog.items_in_category(&label).await?;
            if items.is_empty() {
                return Err(OrderingError::CategoryNotFound(label).into());
            }
            ctx.output.header(&label);
            for item in &items {
                print_item(ctx, item);
            }
        }
        None => {
            ctx.output.header(&ctx.config.restaurant.name);
            for category in catalog.categories().await? {
                let items = catalog.items_in_category(&category.name).await?;
                println!(
                    "\n{}  {}",
                    style(&category.name).bold(),
                    style(&category.description).dim()
                );
                for item in &items {
                    print_item(ctx, item);
                }
            }
        }
    }

    ctx.output.blank();
    ctx.output
        .info("Add an item with `tavola add <item-id>`");
    Ok(())
}

fn print_item(ctx: &Context, item: &MenuItem) {
    println!(
        "  {}  {:<28} {:>8}{}",
        style(format!("[{}]", item.id)).dim(),
        item.name,
        item.price.display(),
        availability_badge(item.available)
    );
    if ctx.output.is_verbose() {
        if let Some(minutes) = item.preparation_minutes {
            ctx.output.kv("prep", &format!("{} min", minutes));
        }
        if !item.description.is_empty() {
            ctx.output.kv("about", &item.description);
        }
    }
}
