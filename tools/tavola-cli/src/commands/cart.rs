//! Show the cart and its totals.

use anyhow::Result;
use console::style;
use tavola_ordering::prelude::*;

use crate::commands::CartArgs;
use crate::context::Context;

pub async fn run(_args: CartArgs, ctx: &Context) -> Result<()> {
    let engine = ctx.engine()?;
    let cart = engine.cart();

    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        ctx.output.info("Browse the menu with `tavola menu`");
        return Ok(());
    }

    ctx.output.header("Your cart");
    for line in cart.lines() {
        println!(
            "  {}  {:<28} x{:<3} {:>8}",
            style(format!("[{}]", line.id())).dim(),
            line.item.name,
            line.quantity,
            line.line_total().display()
        );
        if let Some(note) = &line.special_instructions {
            println!("      {}", style(format!("\"{}\"", note)).dim());
        }
    }

    ctx.output.blank();
    render_totals(cart);
    Ok(())
}

/// The totals block, as shown in cart and checkout views.
pub fn render_totals(cart: &Cart) {
    let width = 10;
    println!("  {:<12} {:>width$}", "Subtotal", cart.subtotal().display());
    println!("  {:<12} {:>width$}", "Tax", cart.tax().display());
    println!(
        "  {:<12} {:>width$}",
        "Delivery",
        cart.delivery_fee().display()
    );
    println!(
        "  {} {}",
        style(format!("{:<12}", "Total")).bold(),
        style(format!("{:>width$}", cart.grand_total().display())).bold()
    );
}

/// One-line cart summary appended to mutation commands.
pub fn summary(cart: &Cart) -> String {
    let items = match cart.item_count() {
        1 => "1 item".to_string(),
        n => format!("{} items", n),
    };
    format!("Cart: {} · {}", items, cart.grand_total().display())
}
