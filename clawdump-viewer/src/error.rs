//! Error types for clawdump-viewer.

use thiserror::Error;

/// Why a bundle could not be loaded. Shown to the user inside the error page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The API answered with a non-success status.
    #[error("GitHub API returned {code}")]
    Status { code: u16 },

    /// Connection, DNS or TLS failure before a status was received.
    #[error("{0}")]
    Transport(String),

    /// The response body was not a gist document.
    #[error("invalid response: {0}")]
    Decode(String),

    /// The identifier cannot be a gist id; no request was made.
    #[error("invalid gist id '{0}'")]
    InvalidId(String),
}

/// All errors that can arise from page rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),
}
