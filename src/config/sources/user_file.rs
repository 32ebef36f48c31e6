//! User config file source (~/.config/itemtree/config.toml on Linux)

use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use std::path::PathBuf;

/// Platform config file path, if a home directory can be resolved
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "itemtree", "itemtree")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add the user config file to builder when it exists.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    match user_config_path() {
        Some(path) => builder.add_source(File::from(path).required(false)),
        None => builder,
    }
}
