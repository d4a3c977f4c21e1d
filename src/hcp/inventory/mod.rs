//! Inventory module - organizations, workspaces and state resources to CSV

mod commands;

pub use commands::{run_inventory_command, InventorySummary};
