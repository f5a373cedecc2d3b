//! Environment configuration.
//!
//! Values come from `PORTFOLIO_*` environment variables; binaries may
//! override them with command-line flags before building clients.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::image_url::ImageUrlBuilder;

pub const DEFAULT_PROJECT_ID: &str = "38uy7m8l";
pub const DEFAULT_DATASET: &str = "production";
pub const DEFAULT_API_VERSION: &str = "2023-10-01";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Connection settings for the content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    /// Serve public reads from the CDN edge
    pub use_cdn: bool,
    pub read_token: Option<String>,
    pub write_token: Option<String>,
    /// Replaces `https://{project_id}.api.sanity.io` (tests, proxies)
    pub api_host: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            project_id: DEFAULT_PROJECT_ID.to_string(),
            dataset: DEFAULT_DATASET.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            use_cdn: true,
            read_token: None,
            write_token: None,
            api_host: None,
        }
    }
}

impl StoreConfig {
    /// Build from `PORTFOLIO_*` variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            project_id: get("PORTFOLIO_PROJECT_ID").unwrap_or(defaults.project_id),
            dataset: get("PORTFOLIO_DATASET").unwrap_or(defaults.dataset),
            api_version: get("PORTFOLIO_API_VERSION").unwrap_or(defaults.api_version),
            use_cdn: get("PORTFOLIO_USE_CDN")
                .map(|v| !matches!(v.as_str(), "0" | "false" | "no"))
                .unwrap_or(defaults.use_cdn),
            read_token: get("PORTFOLIO_READ_TOKEN"),
            write_token: get("PORTFOLIO_WRITE_TOKEN"),
            api_host: get("PORTFOLIO_API_HOST"),
        }
    }

    /// Whether the admin write surface is available.
    pub fn is_admin_configured(&self) -> bool {
        self.write_token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }

    /// Base URL for API calls. Writes never go through the CDN.
    pub fn api_base(&self, for_write: bool) -> String {
        if let Some(host) = &self.api_host {
            return host.trim_end_matches('/').to_string();
        }
        let edge = if self.use_cdn && !for_write { "apicdn" } else { "api" };
        format!("https://{}.{}.sanity.io", self.project_id, edge)
    }

    pub fn image_urls(&self) -> ImageUrlBuilder {
        ImageUrlBuilder::new(&self.project_id, &self.dataset)
    }
}

/// Whole-application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub admin_password: String,
    /// Directory holding the local key-value database
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env(data_dir: PathBuf) -> Self {
        let admin_password = std::env::var("PORTFOLIO_ADMIN_PASSWORD")
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string());

        Self {
            store: StoreConfig::from_env(),
            admin_password,
            data_dir,
        }
    }

    /// Path of the local preferences database.
    pub fn local_db_path(&self) -> PathBuf {
        self.data_dir.join("portfolio.redb")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = StoreConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg, StoreConfig::default());
        assert!(!cfg.is_admin_configured());
    }

    #[test]
    fn test_overrides() {
        let cfg = StoreConfig::from_lookup(lookup(&[
            ("PORTFOLIO_PROJECT_ID", "abc123"),
            ("PORTFOLIO_DATASET", "staging"),
            ("PORTFOLIO_WRITE_TOKEN", "sk-write"),
            ("PORTFOLIO_USE_CDN", "false"),
        ]));
        assert_eq!(cfg.project_id, "abc123");
        assert_eq!(cfg.dataset, "staging");
        assert!(cfg.is_admin_configured());
        assert_eq!(cfg.api_base(false), "https://abc123.api.sanity.io");
    }

    #[test]
    fn test_blank_write_token_is_not_configured() {
        let cfg = StoreConfig::from_lookup(lookup(&[("PORTFOLIO_WRITE_TOKEN", "   ")]));
        assert!(cfg.write_token.is_none());
        assert!(!cfg.is_admin_configured());
    }

    #[test]
    fn test_reads_use_cdn_writes_do_not() {
        let cfg = StoreConfig::default();
        assert_eq!(cfg.api_base(false), "https://38uy7m8l.apicdn.sanity.io");
        assert_eq!(cfg.api_base(true), "https://38uy7m8l.api.sanity.io");
    }

    #[test]
    fn test_api_host_override() {
        let cfg = StoreConfig {
            api_host: Some("http://127.0.0.1:9999/".to_string()),
            ..Default::default()
        };
        assert_eq!(cfg.api_base(false), "http://127.0.0.1:9999");
        assert_eq!(cfg.api_base(true), "http://127.0.0.1:9999");
    }
}
