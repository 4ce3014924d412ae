//! Query configuration shared by the sample layer and the CLI.
//!
//! Precedence (lowest first): defaults, environment, YAML file, CLI flags.
//! The last two are applied by the binary through [`QueryConfig::merge`].

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Items per page for the pagination sample. Must be non-zero.
    pub page_size: usize,

    /// Minimum group cardinality kept by the grouping samples (`count >= min`).
    pub min_group_size: usize,

    /// How many countries the win-sum sample reports.
    pub top_countries: usize,

    /// Minimum number of titles for the title-count sample.
    pub min_titles: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            min_group_size: 2,
            top_countries: 5,
            min_titles: 3,
        }
    }
}

/// Partial overrides, as read from a YAML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub page_size: Option<usize>,
    pub min_group_size: Option<usize>,
    pub top_countries: Option<usize>,
    pub min_titles: Option<usize>,
}

impl ConfigOverrides {
    pub fn from_yaml(src: &str) -> Result<Self> {
        if src.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(src)?)
    }
}

impl QueryConfig {
    /// Build a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `DEFERQ_PAGE_SIZE`
    /// - `DEFERQ_MIN_GROUP_SIZE`
    /// - `DEFERQ_TOP_COUNTRIES`
    /// - `DEFERQ_MIN_TITLES`
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).and_then(|s| s.trim().parse::<usize>().ok());
        let mut cfg = Self::default();

        if let Some(v) = read("DEFERQ_PAGE_SIZE") {
            cfg.page_size = v;
        }
        if let Some(v) = read("DEFERQ_MIN_GROUP_SIZE") {
            cfg.min_group_size = v;
        }
        if let Some(v) = read("DEFERQ_TOP_COUNTRIES") {
            cfg.top_countries = v;
        }
        if let Some(v) = read("DEFERQ_MIN_TITLES") {
            cfg.min_titles = v;
        }

        cfg
    }

    /// Apply every override that is set.
    pub fn merge(&mut self, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.page_size {
            self.page_size = v;
        }
        if let Some(v) = overrides.min_group_size {
            self.min_group_size = v;
        }
        if let Some(v) = overrides.top_countries {
            self.top_countries = v;
        }
        if let Some(v) = overrides.min_titles {
            self.min_titles = v;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_defaults_and_ignores_garbage() {
        let cfg = QueryConfig::from_lookup(|key| match key {
            "DEFERQ_PAGE_SIZE" => Some("10".into()),
            "DEFERQ_MIN_GROUP_SIZE" => Some("three".into()),
            _ => None,
        });
        assert_eq!(cfg.page_size, 10);
        assert_eq!(cfg.min_group_size, 2);
    }

    #[test]
    fn yaml_overrides_are_partial() {
        let overrides = ConfigOverrides::from_yaml("min_group_size: 3\n").unwrap();
        let mut cfg = QueryConfig::default();
        cfg.merge(&overrides);
        assert_eq!(cfg.min_group_size, 3);
        assert_eq!(cfg.page_size, 5);
    }

    #[test]
    fn unknown_yaml_keys_are_config_errors() {
        let err = ConfigOverrides::from_yaml("pagesize: 3\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let cfg = QueryConfig {
            page_size: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
