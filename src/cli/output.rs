//! Output formatting

use anyhow::{Context, Result};
use clap::ValueEnum;
use is_terminal::IsTerminal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single-line JSON, for piping into other tools
    Json,
    /// Indented JSON
    Pretty,
}

impl OutputFormat {
    /// Pretty when a person is reading stdout
    pub fn detect() -> Self {
        if std::io::stdout().is_terminal() {
            OutputFormat::Pretty
        } else {
            OutputFormat::Json
        }
    }

    pub fn render<T: Serialize>(&self, data: &T) -> Result<String> {
        match self {
            OutputFormat::Json => serde_json::to_string(data),
            OutputFormat::Pretty => serde_json::to_string_pretty(data),
        }
        .context("Failed to format output")
    }

    pub fn print<T: Serialize>(&self, data: &T) -> Result<()> {
        println!("{}", self.render(data)?);
        Ok(())
    }
}
