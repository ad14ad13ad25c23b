//! CLI command implementations.

pub mod add;
pub mod cart;
pub mod checkout;
pub mod clear;
pub mod menu;
pub mod note;
pub mod orders;
pub mod qty;
pub mod remove;

use clap::Args;

/// Arguments for the menu command.
#[derive(Args)]
pub struct MenuArgs {
    /// Show only this category (case-insensitive label).
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Menu item id (see `tavola menu`).
    pub item_id: String,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Menu item id.
    pub item_id: String,
}

/// Arguments for the qty command.
#[derive(Args)]
pub struct QtyArgs {
    /// Menu item id.
    pub item_id: String,

    /// New quantity; 0 removes the line.
    pub quantity: i64,
}

/// Arguments for the note command.
#[derive(Args)]
pub struct NoteArgs {
    /// Menu item id.
    pub item_id: String,

    /// Note text; omit to clear the note.
    #[arg(trailing_var_arg = true)]
    pub text: Vec<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {}

/// Arguments for the clear command.
#[derive(Args)]
pub struct ClearArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Customer name.
    #[arg(long)]
    pub name: String,

    /// Contact phone number.
    #[arg(long)]
    pub phone: String,

    /// Delivery address.
    #[arg(long)]
    pub address: Option<String>,

    /// Email for the receipt.
    #[arg(long)]
    pub email: Option<String>,

    /// Payment method: cash, card, or digital.
    #[arg(long, default_value = "card")]
    pub payment: String,

    /// Free-text note for the whole order.
    #[arg(long)]
    pub notes: Option<String>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the orders command.
#[derive(Args)]
pub struct OrdersArgs {
    /// Show only the last N orders.
    #[arg(short, long)]
    pub limit: Option<usize>,
}
