//! GitHub API interaction module
//!
//! Fetches the latest release of a repository from the releases API.

use super::ReleaseSource;
use crate::config::Settings;
use crate::types::Release;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("No releases found for {repo}")]
    NotFound { repo: String },
    #[error("Failed to get release info for {repo}: {status} - {body}")]
    RequestFailed {
        repo: String,
        status: StatusCode,
        body: String,
    },
    #[error("Request for {repo} failed: {source}")]
    Http {
        repo: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Unexpected release response for {repo}: {source}")]
    Malformed {
        repo: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Build the API URL for the latest release of `owner/repository`.
pub fn build_latest_release_url(base_url: &str, owner: &str, repository: &str) -> String {
    format!(
        "{}/repos/{}/{}/releases/latest",
        base_url.trim_end_matches('/'),
        owner,
        repository
    )
}

pub struct GitHubClient {
    client: reqwest::Client,
    settings: Settings,
}

impl GitHubClient {
    pub fn new(settings: Settings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }
}

impl ReleaseSource for GitHubClient {
    async fn latest_release(&self, owner: &str, repository: &str) -> Result<Release, ReleaseError> {
        let repo = format!("{}/{}", owner, repository);
        let url = build_latest_release_url(&self.settings.api_base_url, owner, repository);
        let http_error = |source| ReleaseError::Http {
            repo: repo.clone(),
            source,
        };

        tracing::debug!("Fetching GitHub release info from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", &self.settings.api_version)
            .header("User-Agent", &self.settings.user_agent)
            .send()
            .await
            .map_err(http_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ReleaseError::NotFound { repo });
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(ReleaseError::RequestFailed { repo, status, body });
        }

        let body = response.text().await.map_err(http_error)?;
        let release: Release = serde_json::from_str(&body)
            .map_err(|source| ReleaseError::Malformed { repo, source })?;

        tracing::debug!(
            "Latest release {} has {} asset(s)",
            release.tag_name,
            release.assets.len()
        );
        Ok(release)
    }
}
