//! Error types for the item tree store.

use crate::types::ItemId;
use thiserror::Error;

/// Errors raised by store operations.
///
/// Every variant is produced by a precondition check that runs before any
/// mutation, so a failed operation leaves the current snapshot untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Unknown item id: {0}")]
    UnknownId(ItemId),

    #[error("Invalid drop target: cannot move {drag} relative to {drop}: {reason}")]
    InvalidTarget {
        drag: ItemId,
        drop: ItemId,
        reason: String,
    },

    #[error("Item is not a folder: {0}")]
    NotAFolder(ItemId),

    #[error("Tree invariant violated: {0}")]
    Corrupt(String),
}

/// Errors raised while setting up the store environment (config, logging).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
