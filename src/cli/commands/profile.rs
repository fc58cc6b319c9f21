use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;

use crate::config::{ClientConfig, Config};

#[derive(Args)]
pub struct ProfileCommands {
    #[command(subcommand)]
    pub command: ProfileSubcommands,
}

#[derive(Subcommand)]
pub enum ProfileSubcommands {
    /// Add or replace a connection profile
    Add {
        /// Profile name (e.g., "dev", "prod")
        name: String,
        /// API base URL
        #[arg(long)]
        url: String,
        /// Bearer token
        #[arg(long)]
        token: Option<String>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Select the profile used by default
    Use { name: String },
    /// Remove a profile
    Remove { name: String },
    /// List profiles
    List,
}

pub fn handle_profile_command(args: ProfileCommands, config: &mut Config) -> Result<()> {
    match args.command {
        ProfileSubcommands::Add {
            name,
            url,
            token,
            timeout,
        } => {
            let mut client = ClientConfig::new(url);
            client.token = token;
            if let Some(timeout) = timeout {
                client.timeout_secs = timeout;
            }
            config.add_profile(name.clone(), client)?;
            println!("{} {}", "Saved profile".bright_green(), name.bold());
        }
        ProfileSubcommands::Use { name } => {
            config.set_current_profile(name.clone())?;
            println!("{} {}", "Now using profile".bright_green(), name.bold());
        }
        ProfileSubcommands::Remove { name } => {
            config.remove_profile(&name)?;
            println!("{} {}", "Removed profile".bright_green(), name.bold());
        }
        ProfileSubcommands::List => {
            let names = config.list_profiles();
            if names.is_empty() {
                println!("{}", "No profiles configured. Add one with 'form-design profile add'.".yellow());
            }
            for name in names {
                let marker = if config.current_profile.as_ref() == Some(name) { "*" } else { " " };
                let url = config.profiles.get(name).map(|p| p.base_url.as_str()).unwrap_or("");
                println!("{} {} {}", marker.bright_green(), name.bold(), url.dimmed());
            }
        }
    }
    Ok(())
}
