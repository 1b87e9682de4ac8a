use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_API_VERSION: &str = "2022-11-28";

pub const API_URL_ENV: &str = "LATEST_RELEASE_API_URL";
pub const API_VERSION_ENV: &str = "LATEST_RELEASE_API_VERSION";
pub const USER_AGENT_ENV: &str = "LATEST_RELEASE_USER_AGENT";

/// Settings for talking to the releases API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub api_version: String,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            user_agent: format!("latest-release/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Settings {
    /// Defaults with any environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by variable name. Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = value(API_URL_ENV) {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(version) = value(API_VERSION_ENV) {
            self.api_version = version;
        }

        if let Some(user_agent) = value(USER_AGENT_ENV) {
            self.user_agent = user_agent;
        }

        tracing::debug!("Releases API settings: {:?}", self);
        self
    }
}
