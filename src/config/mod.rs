//! Configuration
//!
//! Settings are layered with the `config` crate: built-in defaults, then the
//! user config file, then `ITEMTREE__*` environment variables.

mod facade;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemTreeConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub gesture: GestureConfig,
}

/// Drag gesture behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Commit every hover into the store (default: true).
    /// When false, only the drop moves the item.
    #[serde(default = "default_true")]
    pub commit_on_hover: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            commit_on_hover: default_true(),
        }
    }
}
