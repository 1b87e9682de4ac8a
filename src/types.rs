use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Release {
    #[serde(default)]
    pub tag_name: String,
    pub assets: Vec<Asset>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub browser_download_url: String,
}

impl Asset {
    pub fn new(name: &str, browser_download_url: &str) -> Self {
        Self {
            name: name.to_string(),
            browser_download_url: browser_download_url.to_string(),
        }
    }
}
