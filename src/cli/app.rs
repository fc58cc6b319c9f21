use super::commands::design::DesignCommand;
use super::commands::profile::ProfileCommands;
use super::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "form-design")]
#[command(about = "Manage workorder form designs from the command line")]
#[command(version)]
pub struct Cli {
    /// API base URL (overrides profile and FORM_DESIGN_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Bearer token (overrides profile and FORM_DESIGN_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Profile from the config file to use instead of the current one
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Output format; pretty on a terminal, compact JSON otherwise
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Design(DesignCommand),
    /// Lint a form design file locally without contacting the backend
    Check {
        /// JSON file holding a form design request or a bare schema
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Connection profile management
    Profile(ProfileCommands),
}
