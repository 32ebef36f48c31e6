//! ConfigLoader facade over the layered sources.

use super::sources::{environment, user_file};
use super::ItemTreeConfig;
use crate::error::ApiError;
use config::{Config, File};
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the user config file and environment.
    /// Precedence: defaults (lowest) -> user file -> environment (highest).
    pub fn load() -> Result<ItemTreeConfig, ApiError> {
        let builder = user_file::add_to_builder(Config::builder());
        let builder = environment::add_to_builder(builder);
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<ItemTreeConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = Config::builder().add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder);
        Ok(builder.build()?.try_deserialize()?)
    }
}
