//! Typed Sapor settings read from environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const ENV_DATASET_PATH: &str = "SAPOR_DATASET_PATH";
pub const ENV_MIN_POSITIVE_RATING: &str = "SAPOR_MIN_POSITIVE_RATING";
pub const ENV_DEFAULT_BUDGET: &str = "SAPOR_DEFAULT_BUDGET";

pub const DEFAULT_DATASET_PATH: &str = "datasets/meal_reasoning_train.jsonl";
pub const DEFAULT_MIN_POSITIVE_RATING: u8 = 4;
pub const DEFAULT_BUDGET: f64 = 15.0;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: String, value: String },
}

/// Runtime settings for the `sapor` binary.
#[derive(Debug, Clone, PartialEq)]
pub struct SaporConfig {
    /// JSONL file receiving positive feedback examples.
    pub dataset_path: PathBuf,
    /// Lowest rating recorded as a training example.
    pub min_positive_rating: u8,
    /// Budget the planner workflow assumes when the request gives none.
    pub default_budget: f64,
}

impl Default for SaporConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            min_positive_rating: DEFAULT_MIN_POSITIVE_RATING,
            default_budget: DEFAULT_BUDGET,
        }
    }
}

impl SaporConfig {
    /// Reads settings from the process environment; unset keys take their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which returns the raw value of a key if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let default_budget = parse_or(&lookup, ENV_DEFAULT_BUDGET, defaults.default_budget)?;
        if !default_budget.is_finite() || default_budget < 0.0 {
            return Err(invalid(ENV_DEFAULT_BUDGET, default_budget.to_string()));
        }
        Ok(Self {
            dataset_path: lookup(ENV_DATASET_PATH)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.dataset_path),
            min_positive_rating: parse_or(
                &lookup,
                ENV_MIN_POSITIVE_RATING,
                defaults.min_positive_rating,
            )?,
            default_budget,
        })
    }
}

fn invalid(key: &str, value: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        value: value.into(),
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| invalid(key, raw)),
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_keys_take_defaults() {
        let cfg = SaporConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, SaporConfig::default());
        assert_eq!(
            cfg.dataset_path,
            PathBuf::from("datasets/meal_reasoning_train.jsonl")
        );
        assert_eq!(cfg.min_positive_rating, 4);
        assert_eq!(cfg.default_budget, 15.0);
    }

    #[test]
    fn set_keys_are_parsed() {
        let cfg = SaporConfig::from_lookup(lookup(&[
            (ENV_DATASET_PATH, "/tmp/train.jsonl"),
            (ENV_MIN_POSITIVE_RATING, " 5 "),
            (ENV_DEFAULT_BUDGET, "22.5"),
        ]))
        .unwrap();
        assert_eq!(cfg.dataset_path, PathBuf::from("/tmp/train.jsonl"));
        assert_eq!(cfg.min_positive_rating, 5);
        assert_eq!(cfg.default_budget, 22.5);
    }

    /// **Scenario**: An unparsable value names the key and the raw value.
    #[test]
    fn bad_values_are_rejected() {
        let err = SaporConfig::from_lookup(lookup(&[(ENV_MIN_POSITIVE_RATING, "high")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: ENV_MIN_POSITIVE_RATING.to_string(),
                value: "high".to_string()
            }
        );
        assert!(err.to_string().contains("SAPOR_MIN_POSITIVE_RATING"));

        assert!(SaporConfig::from_lookup(lookup(&[(ENV_DEFAULT_BUDGET, "-1")])).is_err());
        assert!(SaporConfig::from_lookup(lookup(&[(ENV_DEFAULT_BUDGET, "NaN")])).is_err());
    }

    #[test]
    fn blank_dataset_path_falls_back() {
        let cfg = SaporConfig::from_lookup(lookup(&[(ENV_DATASET_PATH, "  ")])).unwrap();
        assert_eq!(cfg.dataset_path, PathBuf::from(DEFAULT_DATASET_PATH));
    }
}
