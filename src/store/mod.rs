//! Item Store
//!
//! Holds the single authoritative snapshot of the tree and exposes the
//! mutating operations as its only write surface. Every operation builds a
//! new snapshot from the current one and swaps it in whole; observers never
//! see a partially updated tree.

pub mod events;
pub mod snapshot;

pub use events::StoreEvent;
pub use snapshot::Snapshot;

use crate::error::TreeError;
use crate::id::{IdGenerator, UuidGenerator};
use crate::ops;
use crate::types::{HoverPosition, ItemId, ItemKind};
use events::Subscribers;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use tracing::{debug, warn};

/// Owner of the current snapshot
pub struct ItemStore {
    current: Arc<Snapshot>,
    generator: Box<dyn IdGenerator>,
    revision: u64,
    subscribers: Subscribers,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    /// Create a store with random ids and a fresh root folder
    pub fn new() -> Self {
        Self::with_generator(Box::new(UuidGenerator))
    }

    /// Create a store drawing ids (the root's included) from `generator`
    pub fn with_generator(mut generator: Box<dyn IdGenerator>) -> Self {
        let root_id = generator.next_id();
        debug!(root = %root_id, "Creating item store");
        Self {
            current: Arc::new(Snapshot::new_with_root(root_id)),
            generator,
            revision: 0,
            subscribers: Subscribers::default(),
        }
    }

    /// Current snapshot; stays valid after later mutations
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current)
    }

    /// Number of committed changes since creation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Receive an event for every committed change
    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        self.subscribers.subscribe()
    }

    /// Create a file or folder as the last child of the opened folder.
    pub fn create_item(&mut self, kind: ItemKind) -> Result<(Arc<Snapshot>, ItemId), TreeError> {
        let (next, id) = ops::create_item(&self.current, kind, self.generator.as_mut())
            .inspect_err(|e| warn!(%kind, error = %e, "Create rejected"))?;
        let parent_id = next.opened_folder_id().clone();
        debug!(id = %id, %kind, parent = %parent_id, "Created item");
        let snapshot = self.commit(next, StoreEvent::ItemCreated {
            id: id.clone(),
            kind,
            parent_id,
        });
        Ok((snapshot, id))
    }

    /// Relink `drag_id` relative to `drop_id`.
    ///
    /// Repeating the same call is a no-op: the snapshot and revision are
    /// left as they are and no event is emitted.
    pub fn move_item(
        &mut self,
        drag_id: &ItemId,
        drop_id: &ItemId,
        hovering: HoverPosition,
    ) -> Result<Arc<Snapshot>, TreeError> {
        let next = ops::move_item(&self.current, drag_id, drop_id, hovering).inspect_err(|e| {
            warn!(drag = %drag_id, drop = %drop_id, %hovering, error = %e, "Move rejected")
        })?;

        let from_parent = self.current.require(drag_id)?;
        let from_parent = self.current.parent_or_root(from_parent);
        let moved = next.require(drag_id)?;
        let to_parent = next.parent_or_root(moved);
        let index = next
            .require(&to_parent)?
            .position_of(drag_id)
            .ok_or_else(|| {
                TreeError::Corrupt(format!("{} missing from {} after move", drag_id, to_parent))
            })?;

        debug!(
            drag = %drag_id,
            drop = %drop_id,
            %hovering,
            from = %from_parent,
            to = %to_parent,
            index,
            "Moved item"
        );
        Ok(self.commit(next, StoreEvent::ItemMoved {
            id: drag_id.clone(),
            from_parent,
            to_parent,
            index,
        }))
    }

    /// Show `folder_id` in the detail pane.
    pub fn set_opened_folder(&mut self, folder_id: &ItemId) -> Result<Arc<Snapshot>, TreeError> {
        let next = ops::set_opened_folder(&self.current, folder_id)
            .inspect_err(|e| warn!(folder = %folder_id, error = %e, "Open folder rejected"))?;
        debug!(folder = %folder_id, "Opened folder");
        Ok(self.commit(next, StoreEvent::OpenedFolderChanged(folder_id.clone())))
    }

    /// Mark (or clear) the item currently mid-drag.
    pub fn set_drag_item(&mut self, item_id: Option<&ItemId>) -> Result<Arc<Snapshot>, TreeError> {
        let next = ops::set_drag_item(&self.current, item_id)
            .inspect_err(|e| warn!(item = ?item_id, error = %e, "Drag item rejected"))?;
        Ok(self.commit(next, StoreEvent::DragItemChanged(item_id.cloned())))
    }

    fn commit(&mut self, next: Snapshot, event: StoreEvent) -> Arc<Snapshot> {
        if next == *self.current {
            return self.snapshot();
        }
        self.current = Arc::new(next);
        self.revision += 1;
        self.subscribers.publish(&event);
        self.snapshot()
    }
}
