//! clawdump — share OpenClaw context files as a secret GitHub gist.
//!
//! # Usage
//!
//! ```text
//! clawdump list [--json]
//! clawdump share [<file>...] [--acknowledge-private-share]
//! clawdump view [<id>|#<id>|<viewer-url>] [--out <file>] [--api-base <url>]
//! ```
//!
//! Workspace: `$OPENCLAW_STATE_DIR/workspace[-$OPENCLAW_PROFILE]`
//! (state dir defaults to `~/.openclaw`).

mod commands;

use anyhow::Result;
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};

use commands::{list::ListArgs, share::ShareArgs, view::ViewArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "clawdump",
    version,
    about = "Share your OpenClaw context files via a secret GitHub gist",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the context files found in the workspace.
    List(ListArgs),

    /// Upload context files to a secret gist.
    Share(ShareArgs),

    /// Fetch a shared dump and render it as an HTML page.
    View(ViewArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::InvalidSubcommand => {
            Cli::command().print_help()?;
            return Ok(());
        }
        Err(err) => err.exit(),
    };

    match cli.command {
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
        Some(Commands::List(args)) => args.run(),
        Some(Commands::Share(args)) => args.run(),
        Some(Commands::View(args)) => args.run(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
