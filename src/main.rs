use anyhow::Result;
use clap::Parser;
use colored::*;
use log::{debug, info};

use form_design::cli::Cli;
use form_design::cli::commands::run;
use form_design::config::Config;

#[tokio::main]
async fn main() {
    if let Err(e) = try_main().await {
        eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    // Initialize logger to file (truncate on each run) so stdout stays clean for JSON
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("form-design.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    info!("Starting form-design");

    let config = Config::load()?;
    debug!("Current profile: {:?}", config.current_profile);

    run(cli, config).await
}
