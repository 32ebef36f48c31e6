//! File and folder node types

use crate::types::{ItemId, ItemKind};
use serde::{Deserialize, Serialize};

/// Variant payload of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File,
    /// Children in display order
    Folder { children_ids: Vec<ItemId> },
}

/// A file or folder linked into the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// `None` only for the root folder
    pub parent_id: Option<ItemId>,
    pub node: Node,
}

impl Item {
    pub fn file(id: ItemId, parent_id: Option<ItemId>) -> Self {
        Self {
            id,
            parent_id,
            node: Node::File,
        }
    }

    pub fn folder(id: ItemId, parent_id: Option<ItemId>) -> Self {
        Self {
            id,
            parent_id,
            node: Node::Folder {
                children_ids: Vec::new(),
            },
        }
    }

    pub fn new(kind: ItemKind, id: ItemId, parent_id: Option<ItemId>) -> Self {
        match kind {
            ItemKind::File => Self::file(id, parent_id),
            ItemKind::Folder => Self::folder(id, parent_id),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self.node {
            Node::File => ItemKind::File,
            Node::Folder { .. } => ItemKind::Folder,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.node, Node::Folder { .. })
    }

    /// Child ids in display order; empty for files
    pub fn children(&self) -> &[ItemId] {
        match &self.node {
            Node::File => &[],
            Node::Folder { children_ids } => children_ids,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<ItemId>> {
        match &mut self.node {
            Node::File => None,
            Node::Folder { children_ids } => Some(children_ids),
        }
    }

    /// Index of `child` among this folder's children
    pub fn position_of(&self, child: &ItemId) -> Option<usize> {
        self.children().iter().position(|c| c == child)
    }
}
