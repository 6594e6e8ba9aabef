//! `clawdump share [<file>...] [--acknowledge-private-share]`
//!
//! With file names: explicit mode, gated by `--acknowledge-private-share`.
//! Without file names on a terminal: interactive multi-select.

use std::io::IsTerminal;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, MultiSelect};

use clawdump_core::{DiscoveredFile, WorkspaceLocation, CONTEXT_FILES};
use clawdump_share::{
    Dispatcher, FilePicker, GhCli, ShareError, ShareOutcome, ShareRequest, SharedSnippet,
};

use super::{resolve_workspace, ENV_HINT};

/// Arguments for `clawdump share`.
#[derive(Args, Debug)]
pub struct ShareArgs {
    /// Context file names to share, e.g. SOUL.md MEMORY.md. Omit to pick interactively.
    pub files: Vec<String>,

    /// Confirm that the files will be uploaded to a secret gist that anyone
    /// with the link can read.
    #[arg(long)]
    pub acknowledge_private_share: bool,

    /// Base URL of the clawdump web viewer; prints a `<url>#<id>` link on success.
    #[arg(long, env = "CLAWDUMP_VIEWER_URL")]
    pub viewer_url: Option<String>,
}

impl ShareArgs {
    pub fn run(self) -> Result<()> {
        let interactive = self.files.is_empty()
            && !self.acknowledge_private_share
            && std::io::stdin().is_terminal()
            && std::io::stderr().is_terminal();
        tracing::debug!(interactive, files = self.files.len(), "share mode selected");
        let request = if interactive {
            ShareRequest::Interactive
        } else {
            ShareRequest::Explicit {
                names: self.files,
                acknowledged: self.acknowledge_private_share,
            }
        };

        let workspace = resolve_workspace()?;
        let gh = GhCli::default();
        let dispatcher = Dispatcher::new(&gh, &gh, CONTEXT_FILES);
        let picker = PromptPicker {
            workspace: &workspace,
        };

        match dispatcher.share(&workspace, request, &picker)? {
            ShareOutcome::Shared { snippet, files } => {
                print_shared(&snippet, &files, self.viewer_url.as_deref());
            }
            ShareOutcome::Cancelled => {
                tracing::info!("interactive selection cancelled");
                println!("Cancelled — nothing was shared.");
            }
            ShareOutcome::NothingToShare => {
                println!("No context files found in:\n  {workspace}");
                println!("{ENV_HINT}");
            }
        }
        Ok(())
    }
}

fn print_shared(snippet: &SharedSnippet, files: &[DiscoveredFile], viewer_url: Option<&str>) {
    println!(
        "{} Shared {} file(s) as a secret gist",
        "✓".green().bold(),
        files.len()
    );
    for file in files {
        println!("  ·  {}", file.name());
    }
    println!("  {}", snippet.url.bold());
    println!("  id: {}", snippet.id());
    if let Some(base) = viewer_url {
        println!("  view: {}#{}", base.trim_end_matches('#'), snippet.id());
    }
    println!("Only people with the link can view it; it is not listed or searchable.");
}

// ---------------------------------------------------------------------------
// Interactive picker
// ---------------------------------------------------------------------------

struct PromptPicker<'a> {
    workspace: &'a WorkspaceLocation,
}

impl FilePicker for PromptPicker<'_> {
    fn pick(&self, files: &[DiscoveredFile]) -> Result<Option<Vec<usize>>, ShareError> {
        let items: Vec<String> = files
            .iter()
            .map(|f| format!("{:<14} {:>9}  {}", f.name(), f.human_size(), f.description()))
            .collect();

        MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Select files to share from {} (space to toggle, enter to confirm, esc to cancel)",
                self.workspace
            ))
            .items(&items)
            .interact_opt()
            .map_err(|e| ShareError::Prompt(e.to_string()))
    }
}
