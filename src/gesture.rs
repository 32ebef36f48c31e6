//! Drag gestures
//!
//! Turns the host toolkit's drag callbacks (start, hover, drop, end) into
//! store operations. By default every hover commits the candidate position
//! straight into the store, so there is no preview state to roll back: a
//! cancelled drag simply stops where the last hover left the item. With
//! `commit_on_hover` disabled, hovers are only remembered and the drop
//! performs the single move.

use crate::config::GestureConfig;
use crate::error::TreeError;
use crate::ops;
use crate::store::{ItemStore, Snapshot};
use crate::types::{HoverPosition, ItemId};
use std::sync::Arc;
use tracing::debug;

/// One in-progress drag of a single item
#[derive(Debug)]
pub struct DragSession {
    drag_id: ItemId,
    commit_on_hover: bool,
    pending: Option<(ItemId, HoverPosition)>,
}

impl DragSession {
    /// Drag start: mark the item so its source row can be suppressed.
    pub fn start(
        store: &mut ItemStore,
        item_id: &ItemId,
        config: &GestureConfig,
    ) -> Result<Self, TreeError> {
        store.set_drag_item(Some(item_id))?;
        debug!(item = %item_id, commit_on_hover = config.commit_on_hover, "Drag started");
        Ok(Self {
            drag_id: item_id.clone(),
            commit_on_hover: config.commit_on_hover,
            pending: None,
        })
    }

    pub fn drag_id(&self) -> &ItemId {
        &self.drag_id
    }

    /// Last hovered target not yet committed (only without commit-on-hover)
    pub fn pending(&self) -> Option<(&ItemId, HoverPosition)> {
        self.pending.as_ref().map(|(id, hovering)| (id, *hovering))
    }

    /// Pointer moved over `drop_id`.
    ///
    /// Hovering the dragged item itself is ignored. Rejected targets (such
    /// as the item's own descendants) return the error and leave the store
    /// and the session as they were.
    pub fn hover(
        &mut self,
        store: &mut ItemStore,
        drop_id: &ItemId,
        hovering: HoverPosition,
    ) -> Result<(), TreeError> {
        if *drop_id == self.drag_id {
            return Ok(());
        }
        if self.commit_on_hover {
            store.move_item(&self.drag_id, drop_id, hovering)?;
        } else {
            ops::move_item(&store.snapshot(), &self.drag_id, drop_id, hovering)?;
            self.pending = Some((drop_id.clone(), hovering));
        }
        Ok(())
    }

    /// Hover using the pointer position and the target's bounding box.
    pub fn hover_at(
        &mut self,
        store: &mut ItemStore,
        drop_id: &ItemId,
        pointer_y: f64,
        target_top: f64,
        target_height: f64,
    ) -> Result<(), TreeError> {
        let hovering = HoverPosition::from_pointer(pointer_y, target_top, target_height);
        self.hover(store, drop_id, hovering)
    }

    /// Drop on `drop_id`: perform the move and end the drag.
    ///
    /// The drag item is cleared whether or not the move is accepted.
    pub fn drop_on(
        self,
        store: &mut ItemStore,
        drop_id: &ItemId,
        hovering: HoverPosition,
    ) -> Result<Arc<Snapshot>, TreeError> {
        let moved = if *drop_id == self.drag_id {
            Ok(store.snapshot())
        } else {
            store.move_item(&self.drag_id, drop_id, hovering)
        };
        let cleared = store.set_drag_item(None);
        debug!(
            item = %self.drag_id,
            drop = %drop_id,
            %hovering,
            accepted = moved.is_ok(),
            "Drag dropped"
        );
        let snapshot = moved?;
        cleared?;
        Ok(snapshot)
    }

    /// Drag end without a drop: clear the drag item, no move.
    ///
    /// Positions already committed by hovers stay in place; an uncommitted
    /// pending target is discarded.
    pub fn cancel(self, store: &mut ItemStore) -> Result<Arc<Snapshot>, TreeError> {
        debug!(item = %self.drag_id, discarded = self.pending.is_some(), "Drag cancelled");
        store.set_drag_item(None)
    }
}
