//! Filter configuration
//!
//! A [`FilterConfig`] carries the four inputs every detection session is
//! built from: the profanity list, the separator list, the substitution
//! table and the false-positive list, plus the language whose normalizer
//! should run before scanning. Built-in English defaults live in
//! [`defaults`]; custom configurations can be assembled in code or loaded
//! from a file with environment overrides.

mod defaults;

pub use defaults::{
    DEFAULT_FALSE_POSITIVES, DEFAULT_PROFANITIES, DEFAULT_SEPARATORS, DEFAULT_SUBSTITUTIONS,
};

use crate::utils::error::{FilterError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Language whose normalizer runs before scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English normalization (accent collapse)
    #[default]
    English,
    /// French normalization (standalone look-alike replacement)
    French,
}

/// Construction input for a [`ProfanityFilter`](crate::ProfanityFilter).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Canonical blocked terms, in configured order
    pub profanities: Vec<String>,
    /// Characters treated as optional noise between obfuscated letters
    pub separators: Vec<char>,
    /// Canonical letter -> look-alike characters
    pub substitutions: BTreeMap<char, Vec<char>>,
    /// Whole words that must never be flagged
    pub false_positives: Vec<String>,
    /// Active normalizer language
    #[serde(default)]
    pub language: Language,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            profanities: DEFAULT_PROFANITIES.iter().map(|w| w.to_string()).collect(),
            separators: DEFAULT_SEPARATORS.to_vec(),
            substitutions: DEFAULT_SUBSTITUTIONS
                .iter()
                .map(|(letter, looks)| (*letter, looks.to_vec()))
                .collect(),
            false_positives: DEFAULT_FALSE_POSITIVES
                .iter()
                .map(|w| w.to_string())
                .collect(),
            language: Language::English,
        }
    }
}

impl FilterConfig {
    /// Build a configuration with custom word lists over the default
    /// separators and substitution table.
    pub fn with_lists(
        profanities: Vec<String>,
        false_positives: Vec<String>,
    ) -> Self {
        Self {
            profanities,
            false_positives,
            ..Self::default()
        }
    }

    /// Load a configuration from a file (TOML, YAML or JSON as supported by
    /// the `config` crate), with `WORDSCREEN_*` environment variables taking
    /// precedence over file values.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading filter configuration from {}", path.display());

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("WORDSCREEN").separator("__"))
            .build()
            .map_err(|e| FilterError::Config(format!("failed to read configuration: {e}")))?;

        let loaded: Self = settings
            .try_deserialize()
            .map_err(|e| FilterError::Config(format!("invalid configuration: {e}")))?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Check the construction-time invariants. A filter cannot be built from
    /// a configuration that fails here.
    pub fn validate(&self) -> Result<()> {
        if self.profanities.is_empty() {
            return Err(FilterError::Config("no profanities configured".to_string()));
        }
        if self.profanities.iter().any(|w| w.trim().is_empty()) {
            return Err(FilterError::Config(
                "blank profanity entry in configured list".to_string(),
            ));
        }
        if self.substitutions.is_empty() {
            return Err(FilterError::Config(
                "no substitution table configured".to_string(),
            ));
        }
        if self.separators.is_empty() {
            return Err(FilterError::Config("no separators configured".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = FilterConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.profanities.iter().any(|w| w == "fucking"));
        assert!(config.separators.contains(&'-'));
        assert!(config.substitutions.contains_key(&'a'));
    }

    #[test]
    fn test_empty_profanities_rejected() {
        let config = FilterConfig {
            profanities: Vec::new(),
            ..FilterConfig::default()
        };
        assert!(matches!(config.validate(), Err(FilterError::Config(_))));
    }

    #[test]
    fn test_empty_substitutions_rejected() {
        let config = FilterConfig {
            substitutions: BTreeMap::new(),
            ..FilterConfig::default()
        };
        assert!(matches!(config.validate(), Err(FilterError::Config(_))));
    }

    #[test]
    fn test_empty_separators_rejected() {
        let config = FilterConfig {
            separators: Vec::new(),
            ..FilterConfig::default()
        };
        assert!(matches!(config.validate(), Err(FilterError::Config(_))));
    }

    #[test]
    fn test_with_lists_keeps_default_tables() {
        let config = FilterConfig::with_lists(
            vec!["grr".to_string()],
            vec!["grrrl".to_string()],
        );
        assert_eq!(config.profanities, vec!["grr"]);
        assert_eq!(config.false_positives, vec!["grrrl"]);
        assert_eq!(config.separators, DEFAULT_SEPARATORS.to_vec());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("temp file");
        let json = serde_json::json!({
            "profanities": ["grr"],
            "separators": ["-", "."],
            "substitutions": { "g": ["g", "6"], "r": ["r"] },
            "false_positives": ["grrrl"],
            "language": "english"
        });
        write!(file, "{json}").expect("write config");

        let config = FilterConfig::from_file(file.path()).expect("load config");
        assert_eq!(config.profanities, vec!["grr"]);
        assert_eq!(config.separators, vec!['-', '.']);
        assert_eq!(config.substitutions[&'g'], vec!['g', '6']);
        assert_eq!(config.language, Language::English);
    }

    #[test]
    fn test_from_file_missing() {
        let result = FilterConfig::from_file(Path::new("/nonexistent/wordscreen.toml"));
        assert!(matches!(result, Err(FilterError::Config(_))));
    }
}
