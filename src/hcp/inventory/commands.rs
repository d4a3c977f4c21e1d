//! Inventory command handler

use indicatif::ProgressBar;
use log::{debug, info};
use std::path::Path;

use crate::error::Result;
use crate::hcp::TfeClient;
use crate::output::write_csv;
use crate::ui::{abandon_spinner, create_spinner, finish_spinner, set_spinner_message};

/// Counts collected by one inventory run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventorySummary {
    pub organizations: usize,
    pub workspaces: usize,
    pub resources: usize,
}

/// Run the inventory: organizations, then workspaces, then state resources,
/// then the CSV file
///
/// The first failure aborts the whole run; the output file is only written
/// once every workspace has been processed.
pub async fn run_inventory_command(
    client: &TfeClient,
    output: &Path,
    quiet: bool,
) -> Result<InventorySummary> {
    let spinner = create_spinner("Fetching organizations...", quiet);

    match collect_inventory(client, output, &spinner).await {
        Ok(summary) => {
            finish_spinner(
                spinner,
                &format!(
                    "{} resources from {} workspaces written to {}",
                    summary.resources,
                    summary.workspaces,
                    output.display()
                ),
            );
            info!(
                "Completed successfully: {} organizations, {} workspaces, {} resources",
                summary.organizations, summary.workspaces, summary.resources
            );
            Ok(summary)
        }
        Err(e) => {
            abandon_spinner(spinner);
            Err(e)
        }
    }
}

/// Fetch every stage in order and write the CSV file
async fn collect_inventory(
    client: &TfeClient,
    output: &Path,
    spinner: &Option<ProgressBar>,
) -> Result<InventorySummary> {
    let orgs = client.list_organizations().await?;
    debug!("Found {} organizations", orgs.len());

    set_spinner_message(
        spinner,
        format!("Fetching workspaces from {} organization(s)...", orgs.len()),
    );
    let workspaces = client.list_workspaces(&orgs).await?;
    debug!("Found {} workspaces", workspaces.len());

    set_spinner_message(
        spinner,
        format!("Reading state of {} workspace(s)...", workspaces.len()),
    );
    let resources = client.list_resources(&workspaces).await?;
    debug!("Found {} resource instances", resources.len());

    write_csv(&resources, output)?;

    Ok(InventorySummary {
        organizations: orgs.len(),
        workspaces: workspaces.len(),
        resources: resources.len(),
    })
}
