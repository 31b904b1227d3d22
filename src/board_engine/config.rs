//! Board and service settings.
//!
//! Layered the usual way: built-in defaults, then an optional TOML file, then
//! `TRIVIA_*` environment variables.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::board_engine::error::{BoardError, Result};
use crate::source::jservice::parse_base_url;

pub const DEFAULT_API_URL: &str = "https://jservice.io/api/";
pub const DEFAULT_COLUMNS: usize = 6;
pub const DEFAULT_CLUES_PER_CATEGORY: usize = 5;
pub const DEFAULT_CATEGORY_POOL_SIZE: usize = 100;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub api_url: String,
    /// Categories on the board.
    pub columns: usize,
    /// Clues kept per category.
    pub clues_per_category: usize,
    /// How many category ids to ask the service for before sampling columns.
    pub category_pool_size: usize,
    pub request_timeout_secs: u64,
    /// Fixed seed for reproducible boards; `None` draws from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            columns: DEFAULT_COLUMNS,
            clues_per_category: DEFAULT_CLUES_PER_CATEGORY,
            category_pool_size: DEFAULT_CATEGORY_POOL_SIZE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            rng_seed: None,
        }
    }
}

impl BoardConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| BoardError::InvalidConfig(e.to_string()))
    }

    /// Defaults, overlaid with `path` if given, overlaid with the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|e| {
                    BoardError::InvalidConfig(format!("{}: {e}", path.display()))
                })?;
                Self::from_toml_str(&raw)?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `TRIVIA_*` overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("TRIVIA_API_URL") {
            self.api_url = v;
        }
        if let Some(v) = lookup("TRIVIA_COLUMNS") {
            self.columns = parse_var("TRIVIA_COLUMNS", &v)?;
        }
        if let Some(v) = lookup("TRIVIA_CLUES_PER_CATEGORY") {
            self.clues_per_category = parse_var("TRIVIA_CLUES_PER_CATEGORY", &v)?;
        }
        if let Some(v) = lookup("TRIVIA_CATEGORY_POOL_SIZE") {
            self.category_pool_size = parse_var("TRIVIA_CATEGORY_POOL_SIZE", &v)?;
        }
        if let Some(v) = lookup("TRIVIA_REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = parse_var("TRIVIA_REQUEST_TIMEOUT_SECS", &v)?;
        }
        if let Some(v) = lookup("TRIVIA_RNG_SEED") {
            self.rng_seed = Some(parse_var("TRIVIA_RNG_SEED", &v)?);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(BoardError::InvalidConfig("columns must be at least 1".into()));
        }
        if self.clues_per_category == 0 {
            return Err(BoardError::InvalidConfig(
                "clues_per_category must be at least 1".into(),
            ));
        }
        if self.category_pool_size < self.columns {
            return Err(BoardError::InvalidConfig(format!(
                "category_pool_size ({}) is smaller than columns ({})",
                self.category_pool_size, self.columns
            )));
        }
        parse_base_url(&self.api_url)?;
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| BoardError::InvalidConfig(format!("{key}={value:?} is not a valid number")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_the_classic_board() {
        let config = BoardConfig::default();
        assert_eq!(config.columns, 6);
        assert_eq!(config.clues_per_category, 5);
        assert_eq!(config.category_pool_size, 100);
        assert_eq!(config.api_url, "https://jservice.io/api/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = BoardConfig::from_toml_str("columns = 3\nrng_seed = 7\n").unwrap();
        assert_eq!(config.columns, 3);
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.clues_per_category, DEFAULT_CLUES_PER_CATEGORY);
    }

    #[test]
    fn bad_toml_is_config_error() {
        assert!(matches!(
            BoardConfig::from_toml_str("columns = \"six\""),
            Err(BoardError::InvalidConfig(_))
        ));
    }

    #[test]
    fn env_overrides_apply_over_file_values() {
        let env: HashMap<&str, &str> = [
            ("TRIVIA_API_URL", "http://localhost:9000/api"),
            ("TRIVIA_COLUMNS", "4"),
            ("TRIVIA_RNG_SEED", " 42 "),
        ]
        .into_iter()
        .collect();
        let mut config = BoardConfig::from_toml_str("columns = 2").unwrap();
        config
            .apply_env(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.columns, 4);
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.api_url, "http://localhost:9000/api");
    }

    #[test]
    fn non_numeric_env_value_is_rejected() {
        let mut config = BoardConfig::default();
        let err = config
            .apply_env(|k| (k == "TRIVIA_COLUMNS").then(|| "lots".to_string()))
            .unwrap_err();
        assert!(matches!(err, BoardError::InvalidConfig(msg) if msg.contains("TRIVIA_COLUMNS")));
    }

    #[test]
    fn validate_rejects_impossible_shapes() {
        let zero_columns = BoardConfig { columns: 0, ..BoardConfig::default() };
        assert!(zero_columns.validate().is_err());

        let zero_clues = BoardConfig { clues_per_category: 0, ..BoardConfig::default() };
        assert!(zero_clues.validate().is_err());

        let small_pool = BoardConfig { category_pool_size: 3, ..BoardConfig::default() };
        assert!(small_pool.validate().is_err());

        let bad_url = BoardConfig { api_url: "::".into(), ..BoardConfig::default() };
        assert!(bad_url.validate().is_err());
    }
}
