//! `clawdump list [--json]`

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use clawdump_core::{scan, DiscoveredFile, WorkspaceLocation, CONTEXT_FILES};

use super::{resolve_workspace, ENV_HINT};

/// Arguments for `clawdump list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ListJson<'a> {
    workspace: &'a WorkspaceLocation,
    files: &'a [DiscoveredFile],
}

#[derive(Tabled)]
struct FileRow {
    #[tabled(rename = "file")]
    name: &'static str,
    #[tabled(rename = "size")]
    size: String,
    #[tabled(rename = "description")]
    description: &'static str,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let workspace = resolve_workspace()?;

        // Listing never fails the command; an unreadable directory is reported
        // and treated as empty.
        let files = match scan(workspace.path(), CONTEXT_FILES) {
            Ok(files) => files,
            Err(err) => {
                eprintln!("{} {err}", "warning:".yellow().bold());
                Vec::new()
            }
        };

        if self.json {
            let payload = ListJson {
                workspace: &workspace,
                files: &files,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).context("failed to serialize listing JSON")?
            );
            return Ok(());
        }

        print_table(&workspace, &files);
        Ok(())
    }
}

fn print_table(workspace: &WorkspaceLocation, files: &[DiscoveredFile]) {
    println!("Workspace: {}", workspace.to_string().bold());

    if files.is_empty() {
        println!("No context files found.");
        println!("{ENV_HINT}");
        return;
    }

    let rows: Vec<FileRow> = files
        .iter()
        .map(|f| FileRow {
            name: f.name(),
            size: f.human_size(),
            description: f.description(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    println!(
        "Share with: {}",
        "clawdump share <file>... --acknowledge-private-share".cyan()
    );
}
