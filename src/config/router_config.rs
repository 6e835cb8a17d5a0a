use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Environment variable holding the deployment base URL.
pub const BASE_URL_ENV: &str = "BASE_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterConfig {
    /// Prefix every application URL is served under
    pub base_url: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
        }
    }
}

impl RouterConfig {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: normalize_base(base_url.as_ref()),
        }
    }

    /// Load configuration from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(base) = lookup(BASE_URL_ENV) {
            config.base_url = normalize_base(&base);
        }
        debug!(base_url = %config.base_url, "router config loaded");
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let mut config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.base_url = normalize_base(&config.base_url);
        Ok(config)
    }
}

/// Normalize a base URL to the `/segment/.../` form. Empty means `/`.
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RouterConfig::default();
        assert_eq!(config.base_url, "/");
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(""), "/");
        assert_eq!(normalize_base("/"), "/");
        assert_eq!(normalize_base("ara"), "/ara/");
        assert_eq!(normalize_base("/ara"), "/ara/");
        assert_eq!(normalize_base("/ara/ux/"), "/ara/ux/");
    }

    #[test]
    fn test_from_lookup_reads_base_url() {
        let config = RouterConfig::from_lookup(lookup_from(&[("BASE_URL", "/ara")])).unwrap();
        assert_eq!(config.base_url, "/ara/");
    }

    #[test]
    fn test_from_lookup_ignores_unrelated_keys() {
        let config = RouterConfig::from_lookup(lookup_from(&[("ARA_HISTORY", "memory")])).unwrap();
        assert_eq!(config, RouterConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"base_url": "ara"}}"#).unwrap();

        let config = RouterConfig::load(file.path()).unwrap();
        assert_eq!(config.base_url, "/ara/");
    }

    #[test]
    fn test_load_empty_object_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let config = RouterConfig::load(file.path()).unwrap();
        assert_eq!(config, RouterConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = RouterConfig::load(dir.path().join("router.json"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "base_url = '/'").unwrap();

        let result = RouterConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
