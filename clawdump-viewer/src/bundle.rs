//! Remote bundle model and the GitHub gist wire format it is decoded from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

const GIST_WEB_BASE: &str = "https://gist.github.com";

/// One shared dump, fetched fresh for every navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteBundle {
    pub id: String,
    pub owner: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Canonical web location of the bundle.
    pub html_url: String,
    /// Files in the order the API listed them.
    pub files: Vec<BundleFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleFile {
    pub filename: String,
    pub content: String,
}

// ---------------------------------------------------------------------------
// Wire types — `GET /gists/{id}`
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GistResponse {
    #[serde(default)]
    html_url: Option<String>,
    #[serde(default)]
    owner: Option<GistOwner>,
    created_at: DateTime<Utc>,
    // Map keeps document order (serde_json `preserve_order`).
    files: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GistOwner {
    login: String,
}

#[derive(Debug, Deserialize)]
struct GistFile {
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

impl RemoteBundle {
    /// Decode a gist API response body. `id` is the identifier it was requested by.
    pub fn from_gist_json(id: &str, body: &str) -> Result<Self, FetchError> {
        let gist: GistResponse =
            serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

        let mut files = Vec::with_capacity(gist.files.len());
        for (key, value) in gist.files {
            // Deleted files appear as `null` entries.
            if value.is_null() {
                continue;
            }
            let file: GistFile =
                serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))?;
            files.push(BundleFile {
                filename: file.filename.unwrap_or(key),
                content: file.content.unwrap_or_default(),
            });
        }

        Ok(RemoteBundle {
            id: id.to_string(),
            owner: gist.owner.map(|o| o.login),
            created_at: gist.created_at,
            html_url: gist
                .html_url
                .unwrap_or_else(|| format!("{GIST_WEB_BASE}/{id}")),
            files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_files_in_document_order() {
        let body = r##"{
            "id": "abc123",
            "html_url": "https://gist.github.com/abc123",
            "owner": {"login": "octocat"},
            "created_at": "2026-02-03T10:00:00Z",
            "files": {
                "USER.md": {"filename": "USER.md", "content": "u"},
                "AGENTS.md": {"filename": "AGENTS.md", "content": "a"},
                "SOUL.md": {"filename": "SOUL.md", "content": "s"}
            }
        }"##;
        let bundle = RemoteBundle::from_gist_json("abc123", body).expect("decode");
        let names: Vec<&str> = bundle.files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["USER.md", "AGENTS.md", "SOUL.md"]);
        assert_eq!(bundle.owner.as_deref(), Some("octocat"));
        assert_eq!(bundle.created_at.to_rfc3339(), "2026-02-03T10:00:00+00:00");
    }

    #[test]
    fn tolerates_missing_owner_url_and_content() {
        let body = r#"{
            "created_at": "2026-02-03T10:00:00Z",
            "files": {"NOTES.md": {"truncated": true}, "GONE.md": null}
        }"#;
        let bundle = RemoteBundle::from_gist_json("abc123", body).expect("decode");
        assert!(bundle.owner.is_none());
        assert_eq!(bundle.html_url, "https://gist.github.com/abc123");
        assert_eq!(bundle.files.len(), 1);
        assert_eq!(bundle.files[0].filename, "NOTES.md");
        assert_eq!(bundle.files[0].content, "");
    }

    #[test]
    fn rejects_non_gist_json() {
        let err = RemoteBundle::from_gist_json("x", r#"{"message": "Not Found"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
