//! Derived Views
//!
//! Read-only queries over a snapshot used by the presentation layer:
//! folder listings, breadcrumbs, ancestry checks, and a text outline.

use crate::error::TreeError;
use crate::store::Snapshot;
use crate::tree::Item;
use crate::types::ItemId;

/// Children of a folder in display order
pub fn children_of<'a>(
    snapshot: &'a Snapshot,
    folder_id: &ItemId,
) -> Result<Vec<&'a Item>, TreeError> {
    let folder = snapshot.require(folder_id)?;
    if !folder.is_folder() {
        return Err(TreeError::NotAFolder(folder_id.clone()));
    }
    folder
        .children()
        .iter()
        .map(|child| snapshot.require(child))
        .collect()
}

/// Contents of the detail pane
pub fn opened_folder_children(snapshot: &Snapshot) -> Result<Vec<&Item>, TreeError> {
    children_of(snapshot, snapshot.opened_folder_id())
}

/// Ancestors of an item, root first, excluding the item itself
pub fn ancestors_of<'a>(
    snapshot: &'a Snapshot,
    id: &ItemId,
) -> Result<Vec<&'a Item>, TreeError> {
    let mut result = Vec::new();
    let mut current = snapshot.require(id)?;
    while let Some(parent_id) = &current.parent_id {
        if result.len() >= snapshot.len() {
            return Err(TreeError::Corrupt(format!("cycle above {}", id)));
        }
        current = snapshot.require(parent_id)?;
        result.push(current);
    }
    result.reverse();
    Ok(result)
}

/// Whether `id` sits strictly below `ancestor_id`
pub fn is_descendant_of(snapshot: &Snapshot, id: &ItemId, ancestor_id: &ItemId) -> bool {
    let mut current = snapshot.get(id).and_then(|item| item.parent_id.as_ref());
    let mut steps = 0;
    while let Some(parent_id) = current {
        if parent_id == ancestor_id {
            return true;
        }
        steps += 1;
        if steps > snapshot.len() {
            return false;
        }
        current = snapshot.get(parent_id).and_then(|item| item.parent_id.as_ref());
    }
    false
}

/// Distance from the root (the root itself is depth 0)
pub fn depth_of(snapshot: &Snapshot, id: &ItemId) -> Result<usize, TreeError> {
    Ok(ancestors_of(snapshot, id)?.len())
}

/// Whether the item is currently being dragged
pub fn is_dragging(snapshot: &Snapshot, id: &ItemId) -> bool {
    snapshot.drag_item_id() == Some(id)
}

/// Format the tree as an indented outline, children in display order.
pub fn format_tree(snapshot: &Snapshot) -> String {
    let mut output = String::new();
    let Some(root) = snapshot.get(snapshot.root_id()) else {
        return output;
    };

    // (item, line prefix, last among siblings, is root)
    let mut stack: Vec<(&Item, String, bool, bool)> = vec![(root, String::new(), true, true)];
    while let Some((item, prefix, is_last, is_root)) = stack.pop() {
        let connector = if is_root {
            ""
        } else if is_last {
            "└── "
        } else {
            "├── "
        };
        let marker = if item.is_folder() { "/" } else { "" };
        output.push_str(&format!("{}{}{}{}
", prefix, connector, item.id, marker));

        let child_prefix = if is_root {
            String::new()
        } else if is_last {
            format!("{}    ", prefix)
        } else {
            format!("{}│   ", prefix)
        };

        let children: Vec<&Item> = item
            .children()
            .iter()
            .filter_map(|child| snapshot.get(child))
            .collect();
        let last = children.len().saturating_sub(1);
        for (i, child) in children.into_iter().enumerate().rev() {
            stack.push((child, child_prefix.clone(), i == last, false));
        }
    }
    output
}
