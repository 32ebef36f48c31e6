//! Drag-and-drop relocation of items.
//!
//! The drop target decides between two placements:
//!
//! - a folder hovered on its lower half takes the dragged item as its first child;
//! - anything else takes it as a sibling, just above or just below the target.
//!
//! The dragged item is unlinked from its old parent before the target index is
//! looked up, so reordering within one folder and reparenting go through the
//! same path.

use crate::error::TreeError;
use crate::store::Snapshot;
use crate::tree::{Item, Node};
use crate::types::{HoverPosition, ItemId};
use crate::views;

/// Where the dragged item ends up
#[derive(Debug, Clone, PartialEq, Eq)]
enum Placement {
    FirstChildOf(ItemId),
    SiblingIn(ItemId),
}

/// Move `drag_id` next to, or into, `drop_id`.
pub fn move_item(
    snapshot: &Snapshot,
    drag_id: &ItemId,
    drop_id: &ItemId,
    hovering: HoverPosition,
) -> Result<Snapshot, TreeError> {
    let drag_item = snapshot.require(drag_id)?;
    let drop_item = snapshot.require(drop_id)?;

    if drag_id == drop_id {
        return Err(invalid_target(drag_id, drop_id, "item cannot be dropped onto itself"));
    }
    if views::is_descendant_of(snapshot, drop_id, drag_id) {
        return Err(invalid_target(
            drag_id,
            drop_id,
            "drop target is a descendant of the dragged item",
        ));
    }

    let drag_parent_id = snapshot.parent_or_root(drag_item);
    let placement = match (&drop_item.node, hovering) {
        (Node::Folder { .. }, HoverPosition::Below) => Placement::FirstChildOf(drop_id.clone()),
        _ => Placement::SiblingIn(snapshot.parent_or_root(drop_item)),
    };

    let mut next = snapshot.clone();

    next.item_mut(&drag_parent_id)
        .and_then(Item::children_mut)
        .ok_or_else(|| TreeError::NotAFolder(drag_parent_id.clone()))?
        .retain(|child| child != drag_id);

    let new_parent_id = match placement {
        Placement::FirstChildOf(folder_id) => {
            let children = next
                .item_mut(&folder_id)
                .and_then(Item::children_mut)
                .ok_or_else(|| TreeError::NotAFolder(folder_id.clone()))?;
            if !children.contains(drag_id) {
                children.insert(0, drag_id.clone());
            }
            folder_id
        }
        Placement::SiblingIn(parent_id) => {
            let siblings = next
                .item_mut(&parent_id)
                .and_then(Item::children_mut)
                .ok_or_else(|| TreeError::NotAFolder(parent_id.clone()))?;
            let index = match siblings.iter().position(|child| child == drop_id) {
                Some(i) if hovering == HoverPosition::Above => i,
                Some(i) => i + 1,
                None => 0,
            };
            siblings.insert(index, drag_id.clone());
            parent_id
        }
    };

    next.item_mut(drag_id)
        .ok_or_else(|| TreeError::UnknownId(drag_id.clone()))?
        .parent_id = Some(new_parent_id);

    Ok(next)
}

fn invalid_target(drag_id: &ItemId, drop_id: &ItemId, reason: &str) -> TreeError {
    TreeError::InvalidTarget {
        drag: drag_id.clone(),
        drop: drop_id.clone(),
        reason: reason.to_string(),
    }
}
