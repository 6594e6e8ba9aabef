//! Remote read of a bundle by identifier.

use std::time::Duration;

use crate::bundle::RemoteBundle;
use crate::error::FetchError;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Anything that can produce a [`RemoteBundle`] for an identifier.
pub trait BundleSource {
    fn fetch(&self, id: &str) -> Result<RemoteBundle, FetchError>;
}

/// Read-only GitHub gist API client: `GET {base}/gists/{id}`.
pub struct GistApiClient {
    base_url: String,
    agent: ureq::Agent,
}

impl Default for GistApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl GistApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(concat!("clawdump/", env!("CARGO_PKG_VERSION")))
            .timeout_connect(Duration::from_secs(10))
            .build();
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl BundleSource for GistApiClient {
    fn fetch(&self, id: &str) -> Result<RemoteBundle, FetchError> {
        let url = format!("{}/gists/{}", self.base_url, id);
        tracing::info!(%url, "fetching gist");

        let response = self
            .agent
            .get(&url)
            .set("Accept", "application/vnd.github+json")
            .call()
            .map_err(|err| match err {
                ureq::Error::Status(code, _) => FetchError::Status { code },
                ureq::Error::Transport(t) => FetchError::Transport(t.to_string()),
            })?;

        let body = response
            .into_string()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        RemoteBundle::from_gist_json(id, &body)
    }
}

impl<S: BundleSource + ?Sized> BundleSource for &S {
    fn fetch(&self, id: &str) -> Result<RemoteBundle, FetchError> {
        (**self).fetch(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalised() {
        assert_eq!(GistApiClient::new("http://localhost:9/").base_url(), "http://localhost:9");
        assert_eq!(GistApiClient::default().base_url(), DEFAULT_API_BASE);
    }
}
