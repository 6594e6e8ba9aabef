//! Error types for clawdump-share.

use thiserror::Error;

use clawdump_core::CoreError;

/// All errors that can arise while selecting and publishing files.
#[derive(Debug, Error)]
pub enum ShareError {
    /// Explicit mode was used without `--acknowledge-private-share`.
    #[error(
        "refusing to share without --acknowledge-private-share: the selected files will be \
         uploaded to a secret GitHub gist that anyone with the link can read"
    )]
    AcknowledgementRequired,

    /// Explicit mode was used with an empty file list.
    #[error("no files specified; pass one or more context file names")]
    NoFilesSpecified,

    /// One or more requested names are not present in the workspace.
    #[error("file(s) not found in {workspace}: {}", .names.join(", "))]
    FilesNotFound { names: Vec<String>, workspace: String },

    /// The publishing tool could not be started.
    #[error("`{tool}` not found. Install from {install_url}")]
    ToolNotInstalled {
        tool: String,
        install_url: &'static str,
    },

    /// The publishing tool ran but reported no usable credentials.
    #[error("`{tool}` is not authenticated. Run `{login_command}` first.")]
    NotAuthenticated {
        tool: String,
        login_command: String,
    },

    /// The publish call exited non-zero; carries the tool's own error text.
    #[error("{0}")]
    PublishFailed(String),

    /// The interactive prompt failed (not a cancellation).
    #[error("selection prompt failed: {0}")]
    Prompt(String),

    /// Workspace scanning failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The publishing tool could not be spawned for a reason other than absence.
    #[error("failed to run `{tool}`: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },
}
