//! [`GhCli`] — the GitHub CLI as [`AuthChecker`] and [`SnippetPublisher`].
//!
//! | Step    | Invocation                                   |
//! |---------|----------------------------------------------|
//! | auth    | `gh auth status`                             |
//! | publish | `gh gist create --public=false <paths...>`   |
//!
//! Both calls block until `gh` exits; no timeout is applied.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, Output};

use crate::capability::{AuthChecker, SharedSnippet, SnippetPublisher};
use crate::error::ShareError;

const GH_INSTALL_URL: &str = "https://cli.github.com";

/// Invokes `gh` (or a substitute program with the same interface).
#[derive(Debug, Clone)]
pub struct GhCli {
    program: OsString,
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new("gh")
    }
}

impl GhCli {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn tool(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    fn run<I, S>(&self, args: I) -> Result<Output, ShareError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        tracing::debug!(program = %self.tool(), ?args, "spawning");
        Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ShareError::ToolNotInstalled {
                    tool: self.tool(),
                    install_url: GH_INSTALL_URL,
                },
                _ => ShareError::Spawn {
                    tool: self.tool(),
                    source: e,
                },
            })
    }
}

impl AuthChecker for GhCli {
    fn check_auth(&self) -> Result<(), ShareError> {
        let output = self.run(["auth", "status"])?;
        if !output.status.success() {
            tracing::debug!(status = %output.status, "gh auth status failed");
            return Err(ShareError::NotAuthenticated {
                tool: self.tool(),
                login_command: format!("{} auth login", self.tool()),
            });
        }
        Ok(())
    }
}

impl SnippetPublisher for GhCli {
    fn publish(&self, paths: &[PathBuf]) -> Result<SharedSnippet, ShareError> {
        let mut args: Vec<OsString> = vec!["gist".into(), "create".into(), "--public=false".into()];
        args.extend(paths.iter().map(|p| p.as_os_str().to_owned()));

        let output = self.run(args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ShareError::PublishFailed(if stderr.is_empty() {
                "Unknown error".to_string()
            } else {
                stderr
            }));
        }

        let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
        tracing::info!(%url, files = paths.len(), "gist created");
        Ok(SharedSnippet::new(url))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    use super::*;

    fn fake_tool(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("fake-gh");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).expect("chmod");
        path
    }

    #[test]
    fn missing_program_is_not_installed() {
        let gh = GhCli::new("/definitely/not/a/real/gh-binary");
        let err = gh.check_auth().unwrap_err();
        assert!(matches!(err, ShareError::ToolNotInstalled { .. }), "got: {err}");
        assert!(err.to_string().contains("https://cli.github.com"));
    }

    #[test]
    fn failing_auth_status_is_not_authenticated() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let gh = GhCli::new(fake_tool(tmp.path(), "exit 1"));
        let err = gh.check_auth().unwrap_err();
        assert!(matches!(err, ShareError::NotAuthenticated { .. }), "got: {err}");
        assert!(err.to_string().contains("auth login"));
    }

    #[test]
    fn publish_passes_private_flag_and_paths() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let gh = GhCli::new(fake_tool(tmp.path(), r#"echo "https://gist.github.com/u/$3-$#""#));
        let snippet = gh
            .publish(&[PathBuf::from("/w/SOUL.md"), PathBuf::from("/w/USER.md")])
            .expect("publish");
        // $3 is the visibility flag, $# counts gist + create + flag + 2 paths.
        assert_eq!(snippet.url, "https://gist.github.com/u/--public=false-5");
    }

    #[test]
    fn publish_failure_passes_stderr_through() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let gh = GhCli::new(fake_tool(tmp.path(), "echo 'HTTP 422: Validation Failed' >&2; exit 1"));
        let err = gh.publish(&[PathBuf::from("/w/SOUL.md")]).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 422: Validation Failed");
    }

    #[test]
    fn publish_failure_without_stderr_is_unknown() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let gh = GhCli::new(fake_tool(tmp.path(), "exit 2"));
        let err = gh.publish(&[PathBuf::from("/w/SOUL.md")]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown error");
    }
}
