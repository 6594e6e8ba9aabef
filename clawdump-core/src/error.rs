//! Error types for clawdump-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from workspace resolution and scanning.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Listing the workspace directory failed for a reason other than absence.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.openclaw/`.
    #[error("cannot determine home directory; set $HOME or OPENCLAW_STATE_DIR")]
    HomeNotFound,
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> CoreError {
    CoreError::Io {
        path: path.into(),
        source,
    }
}
