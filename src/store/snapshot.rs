//! Immutable store snapshots.

use crate::error::TreeError;
use crate::tree::Item;
use crate::types::ItemId;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Complete store state at one instant.
///
/// Items are held behind `Arc` so cloning a snapshot only copies pointers;
/// operations replace the nodes they touch via [`Snapshot::item_mut`] and
/// leave every earlier snapshot intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub(crate) root_id: ItemId,
    pub(crate) opened_folder_id: ItemId,
    pub(crate) drag_item_id: Option<ItemId>,
    pub(crate) items: HashMap<ItemId, Arc<Item>>,
}

impl Snapshot {
    /// Session start state: a single empty root folder, opened, nothing dragged.
    pub fn new_with_root(root_id: ItemId) -> Self {
        let mut items = HashMap::new();
        items.insert(root_id.clone(), Arc::new(Item::folder(root_id.clone(), None)));
        Self {
            opened_folder_id: root_id.clone(),
            root_id,
            drag_item_id: None,
            items,
        }
    }

    pub fn root_id(&self) -> &ItemId {
        &self.root_id
    }

    pub fn opened_folder_id(&self) -> &ItemId {
        &self.opened_folder_id
    }

    pub fn drag_item_id(&self) -> Option<&ItemId> {
        self.drag_item_id.as_ref()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id).map(Arc::as_ref)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values().map(Arc::as_ref)
    }

    /// Lookup that reports missing ids as [`TreeError::UnknownId`]
    pub fn require(&self, id: &ItemId) -> Result<&Item, TreeError> {
        self.get(id).ok_or_else(|| TreeError::UnknownId(id.clone()))
    }

    /// Parent folder id, with the root standing in for itself
    pub(crate) fn parent_or_root(&self, item: &Item) -> ItemId {
        item.parent_id.clone().unwrap_or_else(|| self.root_id.clone())
    }

    /// Copy-on-write access to a single item
    pub(crate) fn item_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.get_mut(id).map(Arc::make_mut)
    }

    /// Check the structural invariants of the tree.
    pub fn validate(&self) -> Result<(), TreeError> {
        let root = self
            .get(&self.root_id)
            .ok_or_else(|| TreeError::Corrupt(format!("root {} is missing", self.root_id)))?;
        if !root.is_folder() || root.parent_id.is_some() {
            return Err(TreeError::Corrupt(format!(
                "root {} must be a parentless folder",
                self.root_id
            )));
        }

        let mut linked: HashSet<&ItemId> = HashSet::new();
        for item in self.items() {
            for child in item.children() {
                if !linked.insert(child) {
                    return Err(TreeError::Corrupt(format!(
                        "{} is linked more than once",
                        child
                    )));
                }
                let child_item = self.get(child).ok_or_else(|| {
                    TreeError::Corrupt(format!("{} lists unknown child {}", item.id, child))
                })?;
                if child_item.parent_id.as_ref() != Some(&item.id) {
                    return Err(TreeError::Corrupt(format!(
                        "{} is listed under {} but points at {:?}",
                        child, item.id, child_item.parent_id
                    )));
                }
            }
        }

        for item in self.items() {
            if item.id == self.root_id {
                continue;
            }
            let parent_id = item.parent_id.as_ref().ok_or_else(|| {
                TreeError::Corrupt(format!("{} has no parent but is not the root", item.id))
            })?;
            let parent = self.get(parent_id).ok_or_else(|| {
                TreeError::Corrupt(format!("{} points at unknown parent {}", item.id, parent_id))
            })?;
            if parent.position_of(&item.id).is_none() {
                return Err(TreeError::Corrupt(format!(
                    "{} is missing from the children of {}",
                    item.id, parent_id
                )));
            }
            self.check_reaches_root(item)?;
        }

        match self.get(&self.opened_folder_id) {
            Some(item) if item.is_folder() => {}
            _ => {
                return Err(TreeError::Corrupt(format!(
                    "opened folder {} is not an existing folder",
                    self.opened_folder_id
                )))
            }
        }

        if let Some(drag) = &self.drag_item_id {
            if !self.contains(drag) {
                return Err(TreeError::Corrupt(format!("drag item {} is missing", drag)));
            }
        }

        Ok(())
    }

    fn check_reaches_root(&self, item: &Item) -> Result<(), TreeError> {
        let mut current = item;
        for _ in 0..self.items.len() {
            match &current.parent_id {
                None => return Ok(()),
                Some(parent_id) => match self.get(parent_id) {
                    Some(parent) => current = parent,
                    None => break,
                },
            }
        }
        Err(TreeError::Corrupt(format!(
            "{} does not reach the root (cycle)",
            item.id
        )))
    }
}
