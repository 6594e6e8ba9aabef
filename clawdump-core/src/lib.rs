//! clawdump core library — context file catalog, workspace resolution,
//! directory scanning, errors.
//!
//! - [`catalog`] — the fixed list of recognised context files
//! - [`workspace`] — `OPENCLAW_STATE_DIR` / `OPENCLAW_PROFILE` → workspace dir
//! - [`scanner`] — intersect the catalog with a directory listing
//! - [`types`] — domain structs
//! - [`error`] — [`CoreError`]

pub mod catalog;
pub mod error;
pub mod scanner;
pub mod types;
pub mod workspace;

pub use catalog::CONTEXT_FILES;
pub use error::CoreError;
pub use scanner::scan;
pub use types::{format_bytes, ContextFileSpec, DiscoveredFile, WorkspaceLocation};
pub use workspace::WorkspaceEnv;
