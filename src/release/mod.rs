//! Release asset resolution
//!
//! Finds the download URL of the first asset in a repository's latest
//! release whose name matches a glob pattern.

pub mod github;
pub mod glob;

pub use github::{build_latest_release_url, GitHubClient, ReleaseError};
pub use glob::Glob;

use crate::types::{Asset, Release};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Failed to find asset with pattern '{pattern}'.")]
    NoMatch { pattern: String },
    #[error("Invalid asset pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error(transparent)]
    Release(#[from] ReleaseError),
}

/// Anything that can look up the latest release of a repository.
#[allow(async_fn_in_trait)]
pub trait ReleaseSource {
    async fn latest_release(&self, owner: &str, repository: &str) -> Result<Release, ReleaseError>;
}

/// First asset, in the order given, whose name fully matches `glob`.
pub fn select_asset<'a>(assets: &'a [Asset], glob: &Glob) -> Option<&'a Asset> {
    assets.iter().find(|asset| glob.is_match(&asset.name))
}

/// Download URL of the first asset of `release` matching `pattern`.
pub fn find_asset_url<'a>(release: &'a Release, pattern: &str) -> Result<&'a str, ResolveError> {
    let glob = Glob::new(pattern).map_err(|source| ResolveError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let asset = select_asset(&release.assets, &glob).ok_or_else(|| ResolveError::NoMatch {
        pattern: pattern.to_string(),
    })?;

    tracing::debug!("Pattern '{}' matched asset {}", glob.as_str(), asset.name);
    Ok(&asset.browser_download_url)
}

/// Fetch the latest release of `owner/repository` and resolve `pattern`
/// against its assets.
pub async fn resolve_latest_asset_url<S>(
    source: &S,
    owner: &str,
    repository: &str,
    pattern: &str,
) -> Result<String, ResolveError>
where
    S: ReleaseSource,
{
    let release = source.latest_release(owner, repository).await?;
    find_asset_url(&release, pattern).map(str::to_string)
}
