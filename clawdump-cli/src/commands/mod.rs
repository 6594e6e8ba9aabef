pub mod list;
pub mod share;
pub mod view;

use anyhow::{Context, Result};

use clawdump_core::{workspace, WorkspaceLocation};

/// Resolve the workspace from `OPENCLAW_STATE_DIR` / `OPENCLAW_PROFILE`.
pub(crate) fn resolve_workspace() -> Result<WorkspaceLocation> {
    let location =
        workspace::resolve().context("could not resolve the OpenClaw workspace directory")?;
    tracing::debug!(workspace = %location, "resolved workspace");
    Ok(location)
}

pub(crate) const ENV_HINT: &str =
    "Set OPENCLAW_STATE_DIR or OPENCLAW_PROFILE if your workspace is elsewhere.";
