pub mod design;
pub mod profile;

use anyhow::Result;
use colored::*;
use log::{info, warn};

use super::app::{Cli, Commands};
use super::output::OutputFormat;
use crate::api::{FormDesignClient, HttpDispatcher};
use crate::config::{ClientConfig, Config, ENV_API_URL};

pub use design::DesignCommand;
pub use profile::{ProfileCommands, handle_profile_command};

/// Dispatch a parsed command line
pub async fn run(cli: Cli, mut config: Config) -> Result<()> {
    let format = cli.format.unwrap_or_else(OutputFormat::detect);

    match cli.command {
        Commands::Profile(args) => handle_profile_command(args, &mut config),
        Commands::Check { ref file } => {
            let result = design::check_file(file)?;
            format.print(&result)?;
            if !result.is_valid {
                anyhow::bail!("{} has schema errors", file.display());
            }
            eprintln!("{}", "Schema OK".bright_green());
            Ok(())
        }
        Commands::Design(ref command) => {
            let client_config = resolve_client_config(&cli, &config)?;
            info!("Using API base {}", client_config.base_url);

            let client = FormDesignClient::new(HttpDispatcher::new(&client_config)?);
            let output = design::execute(command.clone(), &client, config.settings.default_page_size).await?;
            format.print(&output)
        }
    }
}

/// Connection settings: flags over environment over profile
pub fn resolve_client_config(cli: &Cli, config: &Config) -> Result<ClientConfig> {
    let from_profile = config.profile(cli.profile.as_deref())?.cloned();
    if from_profile.is_none() && std::env::var(ENV_API_URL).is_err() && cli.api_url.is_none() {
        warn!("No profile or API URL configured, falling back to {}", ClientConfig::default().base_url);
    }

    let mut client = from_profile.unwrap_or_default().apply_env();

    if let Some(api_url) = &cli.api_url {
        client.base_url = api_url.clone();
    }
    if let Some(token) = &cli.token {
        client.token = Some(token.clone());
    }

    Ok(client)
}
