//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults;

/// TFE resource inventory CLI
#[derive(Parser, Debug)]
#[command(name = "tfe-inventory")]
#[command(version)]
#[command(
    about = "Inventory Terraform Cloud/Enterprise managed resources to CSV",
    long_about = "Lists every organization and workspace visible to the TFE_TOKEN API token, \
                  reads each workspace's current state and writes one CSV row per \
                  resource instance (name, type, ARN identifier, org, workspace)."
)]
pub struct Cli {
    /// Base URL of the Terraform Cloud/Enterprise server
    #[arg(long, default_value = defaults::URL)]
    pub url: String,

    /// Output CSV file (overwritten if it exists)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = defaults::TIMEOUT_SECS)]
    pub timeout: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Do not show the progress spinner
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
