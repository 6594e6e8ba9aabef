//! Domain types shared by the CLI and the share dispatcher.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

// ---------------------------------------------------------------------------
// Catalog entry
// ---------------------------------------------------------------------------

/// One entry of the fixed context-file catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ContextFileSpec {
    /// Exact, case-sensitive filename.
    pub name: &'static str,
    pub description: &'static str,
}

// ---------------------------------------------------------------------------
// Scan results
// ---------------------------------------------------------------------------

/// A catalog entry that exists in the scanned workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredFile {
    #[serde(flatten)]
    pub spec: ContextFileSpec,
    /// Absolute path to the file on disk.
    pub path: PathBuf,
    /// Size in bytes at scan time.
    pub size: u64,
}

impl DiscoveredFile {
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn description(&self) -> &'static str {
        self.spec.description
    }

    /// Size formatted for display, e.g. `"20 B"` or `"1.5 KB"`.
    pub fn human_size(&self) -> String {
        format_bytes(self.size)
    }
}

/// The directory that holds one profile's context files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WorkspaceLocation(pub PathBuf);

impl WorkspaceLocation {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for WorkspaceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.display().fmt(f)
    }
}

impl From<PathBuf> for WorkspaceLocation {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

impl AsRef<Path> for WorkspaceLocation {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Bytes below 1 KiB print as `"<n> B"`; anything larger as KiB with one decimal.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
