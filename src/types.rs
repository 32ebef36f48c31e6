//! Core types for the item tree store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ItemId: Opaque unique identifier of a file or folder
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Self {
        ItemId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        ItemId(value)
    }
}

/// Item kind requested at creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    File,
    Folder,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::File => write!(f, "file"),
            ItemKind::Folder => write!(f, "folder"),
        }
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(ItemKind::File),
            "folder" => Ok(ItemKind::Folder),
            other => Err(format!(
                "Invalid item kind: {} (must be 'file' or 'folder')",
                other
            )),
        }
    }
}

/// Vertical half of the drop target the pointer currently occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverPosition {
    Above,
    Below,
}

impl HoverPosition {
    /// Derive the hover half from the pointer and the target's bounding box.
    ///
    /// The upper half (strictly above the midline) is `Above`; the midline
    /// itself and everything under it is `Below`.
    pub fn from_pointer(pointer_y: f64, target_top: f64, target_height: f64) -> Self {
        if pointer_y < target_top + target_height / 2.0 {
            HoverPosition::Above
        } else {
            HoverPosition::Below
        }
    }
}

impl fmt::Display for HoverPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoverPosition::Above => write!(f, "above"),
            HoverPosition::Below => write!(f, "below"),
        }
    }
}

impl FromStr for HoverPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "above" => Ok(HoverPosition::Above),
            "below" => Ok(HoverPosition::Below),
            other => Err(format!(
                "Invalid hover position: {} (must be 'above' or 'below')",
                other
            )),
        }
    }
}
