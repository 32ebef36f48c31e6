//! Opened-folder and drag-item state.

use crate::error::TreeError;
use crate::store::Snapshot;
use crate::types::ItemId;

/// Switch the opened folder; files and unknown ids are rejected.
pub fn set_opened_folder(snapshot: &Snapshot, folder_id: &ItemId) -> Result<Snapshot, TreeError> {
    if !snapshot.require(folder_id)?.is_folder() {
        return Err(TreeError::NotAFolder(folder_id.clone()));
    }
    let mut next = snapshot.clone();
    next.opened_folder_id = folder_id.clone();
    Ok(next)
}

/// Set or clear the in-flight drag item.
pub fn set_drag_item(snapshot: &Snapshot, item_id: Option<&ItemId>) -> Result<Snapshot, TreeError> {
    if let Some(id) = item_id {
        snapshot.require(id)?;
    }
    let mut next = snapshot.clone();
    next.drag_item_id = item_id.cloned();
    Ok(next)
}
