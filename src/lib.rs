//! Itemtree: In-Memory File Explorer Store
//!
//! A single-rooted tree of files and folders with one opened folder and
//! drag-and-drop relocation. Every operation turns the current snapshot into
//! a new one; earlier snapshots stay valid and unchanged.

pub mod concurrency;
pub mod config;
pub mod error;
pub mod gesture;
pub mod id;
pub mod logging;
pub mod ops;
pub mod store;
pub mod tree;
pub mod types;
pub mod views;

pub use concurrency::StoreHandle;
pub use error::{ApiError, TreeError};
pub use gesture::DragSession;
pub use store::{ItemStore, Snapshot, StoreEvent};
pub use tree::{Item, Node};
pub use types::{HoverPosition, ItemId, ItemKind};
