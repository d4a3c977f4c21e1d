//! TFE Inventory - Terraform Cloud/Enterprise resource inventory to CSV
//!
//! Walks every organization and workspace visible to an API token, reads
//! each workspace's current state and flattens the managed resource
//! instances into a CSV file.
//!
//! # Example
//!
//! ```bash
//! export TFE_TOKEN=...
//!
//! # HCP Terraform
//! tfe-inventory --output inventory.csv
//!
//! # Terraform Enterprise
//! tfe-inventory --url https://terraform.example.com --output inventory.csv
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod hcp;
pub mod output;
pub mod ui;

pub use cli::Cli;
pub use error::{Result, TfeError};
pub use hcp::{
    resolve_token, run_inventory_command, InventorySummary, Organization, Resource, TfeClient,
    Workspace,
};
pub use output::write_csv;
