//! Item model: files and folders arranged under a single root.

pub mod node;

pub use node::{Item, Node};
