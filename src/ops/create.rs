//! Item creation under the opened folder.

use crate::error::TreeError;
use crate::id::{fresh_id, IdGenerator};
use crate::store::Snapshot;
use crate::tree::Item;
use crate::types::{ItemId, ItemKind};
use std::sync::Arc;

/// Create a new item as the last child of the opened folder.
pub fn create_item(
    snapshot: &Snapshot,
    kind: ItemKind,
    generator: &mut dyn IdGenerator,
) -> Result<(Snapshot, ItemId), TreeError> {
    let parent_id = snapshot.opened_folder_id().clone();
    if !snapshot.require(&parent_id)?.is_folder() {
        return Err(TreeError::NotAFolder(parent_id));
    }

    let id = fresh_id(generator, snapshot);
    let mut next = snapshot.clone();
    next.items.insert(
        id.clone(),
        Arc::new(Item::new(kind, id.clone(), Some(parent_id.clone()))),
    );
    next.item_mut(&parent_id)
        .and_then(Item::children_mut)
        .ok_or_else(|| TreeError::NotAFolder(parent_id.clone()))?
        .push(id.clone());

    Ok((next, id))
}
