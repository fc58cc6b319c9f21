//! Form-design subcommands, one per endpoint

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::{
    check_schema, CloneFormDesignReq, DetailFormDesignReq, Dispatcher, FormDesignClient,
    FormDesignReq, FormSchema, ListFormDesignReq, PublishFormDesignReq, ValidateFormDesignResp,
};

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum DesignCommand {
    /// Create a form design from a JSON file
    Create {
        /// JSON file holding the form design request
        #[arg(short, long)]
        file: PathBuf,
        /// File the design under this category
        #[arg(long)]
        category_id: Option<i64>,
    },
    /// Update a form design from a JSON file
    Update {
        /// JSON file holding the form design request
        #[arg(short, long)]
        file: PathBuf,
        /// Design to update; overrides the id in the file
        #[arg(long)]
        id: Option<i64>,
    },
    /// Delete a form design
    Delete { id: i64 },
    /// List form designs
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Page size; defaults to the configured default_page_size
        #[arg(long)]
        size: Option<u32>,
        #[arg(long)]
        category_id: Option<i64>,
        #[arg(long)]
        status: Option<i32>,
        /// Match against name and description
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a form design with its schema
    Detail { id: i64 },
    /// Publish a form design
    Publish { id: i64 },
    /// Copy a form design under a new name
    Clone {
        id: i64,
        #[arg(long)]
        name: String,
    },
    /// Show the render-only schema of a form design
    Preview { id: i64 },
}

/// Run one design command and return what should be printed
pub async fn execute<D: Dispatcher>(
    command: DesignCommand,
    client: &FormDesignClient<D>,
    default_page_size: u32,
) -> Result<Value> {
    match command {
        DesignCommand::Create { file, category_id } => {
            let mut req = read_design_file(&file)?;
            if category_id.is_some() {
                req.category_id = category_id;
            }
            req.id = None;

            let created = client.create(&req).await?;
            eprintln!("{} {}", "Created form design".bright_green(), req.name.bold());
            Ok(serde_json::to_value(created)?)
        }
        DesignCommand::Update { file, id } => {
            let mut req = read_design_file(&file)?;
            if id.is_some() {
                req.id = id;
            }

            let updated = client.update(&req).await?;
            eprintln!("{} {}", "Updated form design".bright_green(), req.name.bold());
            Ok(serde_json::to_value(updated)?)
        }
        DesignCommand::Delete { id } => {
            let data = client.delete(&DetailFormDesignReq { id }).await?;
            eprintln!("{} {}", "Deleted form design".bright_green(), id);
            Ok(data)
        }
        DesignCommand::List {
            page,
            size,
            category_id,
            status,
            search,
        } => {
            let req = ListFormDesignReq {
                page,
                size: size.unwrap_or(default_page_size),
                category_id,
                status,
                search,
            };
            let list = client.list(&req).await?;
            eprintln!(
                "{}",
                format!("{} of {} form designs (page {})", list.items.len(), list.total, page).dimmed()
            );
            Ok(serde_json::to_value(list)?)
        }
        DesignCommand::Detail { id } => {
            let design = client.detail(&DetailFormDesignReq { id }).await?;
            Ok(serde_json::to_value(design)?)
        }
        DesignCommand::Publish { id } => {
            let data = client.publish(&PublishFormDesignReq { id }).await?;
            eprintln!("{} {}", "Published form design".bright_green(), id);
            Ok(data)
        }
        DesignCommand::Clone { id, name } => {
            let data = client.clone_design(&CloneFormDesignReq { id, name: name.clone() }).await?;
            eprintln!("{} {} as {}", "Cloned form design".bright_green(), id, name.bold());
            Ok(data)
        }
        DesignCommand::Preview { id } => {
            let preview = client.preview(&DetailFormDesignReq { id }).await?;
            Ok(serde_json::to_value(preview)?)
        }
    }
}

/// Lint a design file. Accepts either a full request or a bare schema.
pub fn check_file(path: &Path) -> Result<ValidateFormDesignResp> {
    let value = read_json(path)?;

    let schema: FormSchema = if value.get("schema").is_some() {
        let req: FormDesignReq = serde_json::from_value(value)
            .with_context(|| format!("Invalid form design in {}", path.display()))?;
        req.schema
    } else {
        serde_json::from_value(value)
            .with_context(|| format!("Invalid form schema in {}", path.display()))?
    };

    Ok(check_schema(&schema))
}

fn read_design_file(path: &Path) -> Result<FormDesignReq> {
    let value = read_json(path)?;
    serde_json::from_value(value)
        .with_context(|| format!("Invalid form design in {}", path.display()))
}

fn read_json(path: &Path) -> Result<Value> {
    if !path.exists() {
        anyhow::bail!("File does not exist: {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))
}
