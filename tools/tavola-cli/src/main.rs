//! Tavola CLI - reference client for the food-ordering core.
//!
//! Commands:
//! - `tavola menu` - Browse the menu
//! - `tavola add` - Add an item to the cart
//! - `tavola remove` - Remove an item from the cart
//! - `tavola qty` - Set an item's quantity
//! - `tavola note` - Set or clear an item's special instructions
//! - `tavola cart` - Show the cart and its totals
//! - `tavola clear` - Empty the cart
//! - `tavola checkout` - Submit the order
//! - `tavola orders` - Show past orders

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    AddArgs, CartArgs, CheckoutArgs, ClearArgs, MenuArgs, NoteArgs, OrdersArgs, QtyArgs,
    RemoveArgs,
};

/// Tavola - order food from the terminal
#[derive(Parser)]
#[command(name = "tavola")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory the cart and order history are stored in
    /// (also honors TAVOLA_CART_DIR)
    #[arg(long, global = true)]
    cart_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the menu
    Menu(MenuArgs),

    /// Add an item to the cart
    Add(AddArgs),

    /// Remove an item from the cart
    Remove(RemoveArgs),

    /// Set an item's quantity (0 removes it)
    Qty(QtyArgs),

    /// Set or clear an item's special instructions
    Note(NoteArgs),

    /// Show the cart and its totals
    Cart(CartArgs),

    /// Empty the cart
    Clear(ClearArgs),

    /// Submit the order
    Checkout(CheckoutArgs),

    /// Show past orders
    Orders(OrdersArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose);

    // Load config and resolve the storage directory
    let ctx = context::Context::load(cli.cart_dir.as_deref(), output)?;

    // Execute command
    let result = match cli.command {
        Commands::Menu(args) => commands::menu::run(args, &ctx).await,
        Commands::Add(args) => commands::add::run(args, &ctx).await,
        Commands::Remove(args) => commands::remove::run(args, &ctx).await,
        Commands::Qty(args) => commands::qty::run(args, &ctx).await,
        Commands::Note(args) => commands::note::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Clear(args) => commands::clear::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Orders(args) => commands::orders::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
