//! Load configuration from XDG `config.toml` and project `.env`, apply it to the process
//! environment with priority **existing env > .env > XDG**, then read typed Sapor settings.
//!
//! ```no_run
//! config::load_and_apply("sapor", None)?;
//! let settings = config::SaporConfig::from_env()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod dotenv;
mod settings;
mod xdg_toml;

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

pub use settings::{
    ConfigError, SaporConfig, DEFAULT_BUDGET, DEFAULT_DATASET_PATH, DEFAULT_MIN_POSITIVE_RATING,
    ENV_DATASET_PATH, ENV_DEFAULT_BUDGET, ENV_MIN_POSITIVE_RATING,
};
pub use xdg_toml::config_path;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("xdg config path: {0}")]
    XdgPath(String),
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
}

/// Sets environment variables from `.env` and the XDG `[env]` table, only for keys that
/// are **not** already set.
///
/// For a key missing from the process environment, `.env` (in `override_dir` or the
/// current directory) wins over `$XDG_CONFIG_HOME/<app_name>/config.toml`.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<(), LoadError> {
    let xdg_map = xdg_toml::load_env_map(app_name)?;
    let dotenv_map = dotenv::load_env_map(override_dir).map_err(LoadError::DotenvRead)?;

    let keys: HashSet<&String> = xdg_map.keys().chain(dotenv_map.keys()).collect();
    for key in keys {
        if std::env::var_os(key).is_some() {
            continue;
        }
        if let Some(value) = dotenv_map.get(key).or_else(|| xdg_map.get(key)) {
            std::env::set_var(key, value);
        }
    }
    Ok(())
}
