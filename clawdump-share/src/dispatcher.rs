//! Share flow: validate selection → check credentials → publish.
//!
//! ## Ordering guarantees
//!
//! 1. Explicit mode rejects an empty name list, then checks the
//!    acknowledgement flag, before touching the filesystem or any external tool.
//! 2. Every requested name is resolved before the first external call; one
//!    missing name aborts the whole request.
//! 3. The credential check runs before the publish call, and neither is retried.

use std::path::PathBuf;

use clawdump_core::{scan, ContextFileSpec, DiscoveredFile, WorkspaceLocation};

use crate::capability::{AuthChecker, FilePicker, SharedSnippet, SnippetPublisher};
use crate::error::ShareError;

/// How the files to share are chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareRequest {
    /// Prompt the user with the discovered files.
    Interactive,
    /// Share exactly these filenames; requires prior acknowledgement.
    Explicit {
        names: Vec<String>,
        acknowledged: bool,
    },
}

/// Non-error results of [`Dispatcher::share`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Files were uploaded.
    Shared {
        snippet: SharedSnippet,
        files: Vec<DiscoveredFile>,
    },
    /// The user aborted the interactive selection. Nothing was uploaded.
    Cancelled,
    /// Interactive mode found no catalog files in the workspace.
    NothingToShare,
}

/// Runs the share flow against injected capabilities.
pub struct Dispatcher<'a, A, P> {
    auth: &'a A,
    publisher: &'a P,
    catalog: &'a [ContextFileSpec],
}

impl<'a, A, P> Dispatcher<'a, A, P>
where
    A: AuthChecker,
    P: SnippetPublisher,
{
    pub fn new(auth: &'a A, publisher: &'a P, catalog: &'a [ContextFileSpec]) -> Self {
        Self {
            auth,
            publisher,
            catalog,
        }
    }

    pub fn share(
        &self,
        workspace: &WorkspaceLocation,
        request: ShareRequest,
        picker: &dyn FilePicker,
    ) -> Result<ShareOutcome, ShareError> {
        let files = match request {
            ShareRequest::Explicit {
                names,
                acknowledged,
            } => {
                if names.is_empty() {
                    return Err(ShareError::NoFilesSpecified);
                }
                if !acknowledged {
                    return Err(ShareError::AcknowledgementRequired);
                }
                let discovered = scan(workspace.path(), self.catalog)?;
                select_named(&discovered, &names, workspace)?
            }
            ShareRequest::Interactive => {
                let discovered = scan(workspace.path(), self.catalog)?;
                if discovered.is_empty() {
                    return Ok(ShareOutcome::NothingToShare);
                }
                match picker.pick(&discovered)? {
                    Some(indices) => {
                        let chosen = select_indices(&discovered, &indices);
                        if chosen.is_empty() {
                            return Ok(ShareOutcome::Cancelled);
                        }
                        chosen
                    }
                    None => return Ok(ShareOutcome::Cancelled),
                }
            }
        };

        self.publish(files)
    }

    fn publish(&self, files: Vec<DiscoveredFile>) -> Result<ShareOutcome, ShareError> {
        self.auth.check_auth()?;

        let paths: Vec<PathBuf> = files.iter().map(|f| f.path.clone()).collect();
        tracing::info!(files = paths.len(), "publishing private snippet");
        let snippet = self.publisher.publish(&paths)?;
        Ok(ShareOutcome::Shared { snippet, files })
    }
}

/// Resolve `names` against the discovered set. Duplicates collapse; the result
/// keeps the order in which names were first requested.
fn select_named(
    discovered: &[DiscoveredFile],
    names: &[String],
    workspace: &WorkspaceLocation,
) -> Result<Vec<DiscoveredFile>, ShareError> {
    let mut selected: Vec<DiscoveredFile> = Vec::with_capacity(names.len());
    let mut missing: Vec<String> = Vec::new();

    for name in names {
        match discovered.iter().find(|f| f.name() == name.as_str()) {
            Some(file) => {
                if !selected.iter().any(|s| s.name() == file.name()) {
                    selected.push(file.clone());
                }
            }
            None => {
                if !missing.contains(name) {
                    missing.push(name.clone());
                }
            }
        }
    }

    if !missing.is_empty() {
        return Err(ShareError::FilesNotFound {
            names: missing,
            workspace: workspace.to_string(),
        });
    }
    Ok(selected)
}

fn select_indices(discovered: &[DiscoveredFile], indices: &[usize]) -> Vec<DiscoveredFile> {
    let mut sorted: Vec<usize> = indices
        .iter()
        .copied()
        .filter(|i| *i < discovered.len())
        .collect();
    sorted.sort_unstable();
    sorted.dedup();
    sorted.into_iter().map(|i| discovered[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn file(name: &'static str) -> DiscoveredFile {
        DiscoveredFile {
            spec: ContextFileSpec {
                name,
                description: "",
            },
            path: PathBuf::from("/ws").join(name),
            size: 1,
        }
    }

    fn ws() -> WorkspaceLocation {
        WorkspaceLocation(PathBuf::from("/ws"))
    }

    #[rstest]
    #[case(&["SOUL.md"], &["SOUL.md"])]
    #[case(&["USER.md", "SOUL.md"], &["USER.md", "SOUL.md"])]
    #[case(&["USER.md", "SOUL.md", "USER.md"], &["USER.md", "SOUL.md"])]
    #[case(&["SOUL.md", "SOUL.md"], &["SOUL.md"])]
    fn select_named_dedupes_and_keeps_request_order(
        #[case] requested: &[&str],
        #[case] expected: &[&str],
    ) {
        let discovered = vec![file("SOUL.md"), file("USER.md")];
        let names: Vec<String> = requested.iter().map(|s| s.to_string()).collect();
        let selected = select_named(&discovered, &names, &ws()).expect("select");
        let got: Vec<&str> = selected.iter().map(|f| f.name()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn select_named_reports_every_missing_name() {
        let discovered = vec![file("SOUL.md")];
        let names = vec!["A.md".to_string(), "SOUL.md".to_string(), "B.md".to_string()];
        let err = select_named(&discovered, &names, &ws()).unwrap_err();
        match err {
            ShareError::FilesNotFound { names, .. } => assert_eq!(names, vec!["A.md", "B.md"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn select_indices_ignores_out_of_range() {
        let discovered = vec![file("SOUL.md"), file("USER.md")];
        let got = select_indices(&discovered, &[1, 7, 1]);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].name(), "USER.md");
    }
}
