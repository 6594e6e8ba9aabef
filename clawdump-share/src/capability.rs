//! Narrow capability traits around the external publishing tool and the
//! interactive prompt, so [`crate::Dispatcher`] never spawns processes itself.

use std::path::PathBuf;

use clawdump_core::DiscoveredFile;

use crate::error::ShareError;

/// Verifies that the publishing tool is installed and logged in.
pub trait AuthChecker {
    fn check_auth(&self) -> Result<(), ShareError>;
}

/// Uploads local files as one private, link-accessible snippet.
pub trait SnippetPublisher {
    fn publish(&self, paths: &[PathBuf]) -> Result<SharedSnippet, ShareError>;
}

/// Lets the user choose among discovered files.
///
/// Returns indices into `files`; `None` means the user aborted.
pub trait FilePicker {
    fn pick(&self, files: &[DiscoveredFile]) -> Result<Option<Vec<usize>>, ShareError>;
}

/// Location of a published snippet as reported by the publishing tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedSnippet {
    pub url: String,
}

impl SharedSnippet {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Opaque identifier: the last non-empty path segment of the URL.
    pub fn id(&self) -> &str {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("https://gist.github.com/octocat/abc123", "abc123")]
    #[case("https://gist.github.com/abc123/", "abc123")]
    #[case("abc123", "abc123")]
    #[case("", "")]
    fn id_is_last_segment(#[case] url: &str, #[case] expected: &str) {
        assert_eq!(SharedSnippet::new(url).id(), expected);
    }
}
