//! Workspace directory resolution.
//!
//! # Layout
//!
//! ```text
//! $OPENCLAW_STATE_DIR (default ~/.openclaw)/
//!   workspace/             (no profile, or profile "default")
//!   workspace-<profile>/   (any other profile)
//! ```
//!
//! # API pattern
//!
//! - `resolve_at(home, env)` — explicit home and environment; pure, no I/O
//! - `absolutize_at(cwd, location)` — anchors a relative result at `cwd`; pure
//! - `resolve()` — reads the process environment, `dirs::home_dir()` and the
//!   current directory
//!
//! Tests must NEVER call the no-arg wrapper; always use the `_at` forms.

use std::path::Path;

use crate::error::{io_err, CoreError};
use crate::types::WorkspaceLocation;

pub const STATE_DIR_VAR: &str = "OPENCLAW_STATE_DIR";
pub const PROFILE_VAR: &str = "OPENCLAW_PROFILE";

const STATE_DIR_NAME: &str = ".openclaw";
const DEFAULT_WORKSPACE: &str = "workspace";
const DEFAULT_PROFILE: &str = "default";

/// The two optional environment inputs, trimmed. Blank values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceEnv {
    pub state_dir: Option<String>,
    pub profile: Option<String>,
}

impl WorkspaceEnv {
    pub fn new(state_dir: Option<&str>, profile: Option<&str>) -> Self {
        Self {
            state_dir: normalize(state_dir),
            profile: normalize(profile),
        }
    }

    /// Snapshot `OPENCLAW_STATE_DIR` and `OPENCLAW_PROFILE` from the process environment.
    pub fn from_env() -> Self {
        let state_dir = std::env::var(STATE_DIR_VAR).ok();
        let profile = std::env::var(PROFILE_VAR).ok();
        Self::new(state_dir.as_deref(), profile.as_deref())
    }

    /// The profile name, unless it is absent or the `default` marker.
    pub fn named_profile(&self) -> Option<&str> {
        self.profile
            .as_deref()
            .filter(|p| !p.eq_ignore_ascii_case(DEFAULT_PROFILE))
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// Compute the workspace directory for `env`, using `home` only when no
/// state-dir override is set.
pub fn resolve_at(home: &Path, env: &WorkspaceEnv) -> WorkspaceLocation {
    let state_dir = match env.state_dir.as_deref() {
        Some(dir) => Path::new(dir).to_path_buf(),
        None => home.join(STATE_DIR_NAME),
    };
    let dir = match env.named_profile() {
        Some(profile) => state_dir.join(format!("{DEFAULT_WORKSPACE}-{profile}")),
        None => state_dir.join(DEFAULT_WORKSPACE),
    };
    WorkspaceLocation(dir)
}

/// Join a relative `location` onto `cwd`; absolute locations pass through.
pub fn absolutize_at(cwd: &Path, location: WorkspaceLocation) -> WorkspaceLocation {
    if location.0.is_absolute() {
        location
    } else {
        WorkspaceLocation(cwd.join(location.0))
    }
}

/// `resolve_at` convenience wrapper over the live environment.
///
/// The home directory is only required when `OPENCLAW_STATE_DIR` is unset.
/// A relative `OPENCLAW_STATE_DIR` is anchored at the current directory.
pub fn resolve() -> Result<WorkspaceLocation, CoreError> {
    let env = WorkspaceEnv::from_env();
    let location = if env.state_dir.is_some() {
        resolve_at(Path::new(""), &env)
    } else {
        let home = dirs::home_dir().ok_or(CoreError::HomeNotFound)?;
        resolve_at(&home, &env)
    };
    if location.0.is_absolute() {
        return Ok(location);
    }
    let cwd = std::env::current_dir().map_err(|e| io_err(".", e))?;
    Ok(absolutize_at(&cwd, location))
}
