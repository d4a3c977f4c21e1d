//! TFE API client module
//!
//! This module provides functionality to interact with the Terraform
//! Cloud/Enterprise API and to build the resource inventory from it.

mod client;
mod credentials;
pub mod inventory;
pub mod organizations;
pub mod state;
pub mod traits;
pub mod workspaces;

use serde::Deserialize;

pub use client::TfeClient;
pub use credentials::resolve_token;
pub use inventory::{run_inventory_command, InventorySummary};
pub use organizations::Organization;
pub use state::{Resource, TerraformState};
pub use traits::{ApiListResponse, PaginatedResponse};
pub use workspaces::Workspace;

/// Pagination links from TFE API (shared across resources)
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationLinks {
    /// Absolute URL of the next page; absent or null on the last page
    #[serde(default)]
    pub next: Option<String>,
}
