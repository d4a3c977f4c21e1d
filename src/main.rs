//! TFE Inventory - Main entry point

use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;
use std::time::Duration;

use tfe_inventory::{resolve_token, run_inventory_command, Cli, Result, TfeClient};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    info!("Starting tfe-inventory v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: url={}, output={}, timeout={}s, quiet={}",
        cli.url,
        cli.output.display(),
        cli.timeout,
        cli.quiet
    );

    // Token must be present before any request is made
    let token = resolve_token()?;

    let client = TfeClient::new(token, &cli.url, Duration::from_secs(cli.timeout))?;

    run_inventory_command(&client, &cli.output, cli.quiet).await?;
    Ok(())
}
