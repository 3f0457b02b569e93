//! # dine-config
//!
//! Layered configuration loading for Dine using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DINE_*` prefix, `__` as separator)
//! 2. Project-level `.dine/config.toml`
//! 3. User-level `~/.config/dine/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DINE_STORE__PATH` -> `store.path`, `DINE_RATING__UP_MIN` -> `rating.up_min`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use dine_config::DineConfig;
//!
//! let config = DineConfig::load_with_dotenv().expect("config");
//! println!("snapshot at {}", config.store.path);
//! ```

mod error;
mod general;
mod rating;
mod store;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use rating::RatingConfig;
pub use store::{IN_MEMORY, StoreConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DineConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub rating: RatingConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl DineConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Load `.env` from the current directory or its parents, if there is one.
    ///
    /// A missing file is normal. A file that cannot be read or parsed is
    /// logged and skipped so config loading still proceeds from the other
    /// sources. Returns the path of the file that was loaded.
    fn load_dotenv() -> Option<PathBuf> {
        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "loaded .env");
                Some(path)
            }
            Err(error) if error.not_found() => None,
            Err(error) => {
                tracing::debug!(%error, "skipping unreadable .env");
                None
            }
        }
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.rating.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".dine/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("DINE_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dine").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = DineConfig::default();
        assert_eq!(config.store.path, ".dine/dine.json");
        assert!(config.rating.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = DineConfig::from_figment(&DineConfig::figment())
                .expect("should extract defaults");
            assert!(!config.store.is_in_memory());
            assert!((config.rating.up_min - 0.33).abs() < f64::EPSILON);
            Ok(())
        });
    }

    #[test]
    fn dotenv_file_is_loaded_when_present() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(".env", "DINE_TEST_DOTENV_MARKER=1")?;
            let loaded = DineConfig::load_dotenv().expect(".env should load");
            assert!(loaded.ends_with(".env"));
            assert_eq!(std::env::var("DINE_TEST_DOTENV_MARKER").as_deref(), Ok("1"));
            Ok(())
        });
    }

    #[test]
    fn malformed_dotenv_does_not_block_config() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(".env", "this line has no equals sign")?;
            assert!(DineConfig::load_dotenv().is_none());
            assert!(DineConfig::load_with_dotenv().is_ok());
            Ok(())
        });
    }
}
