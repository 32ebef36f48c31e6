//! Change notifications for store subscribers.

use crate::types::{ItemId, ItemKind};
use std::sync::mpsc::{channel, Receiver, Sender};

/// Store change event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    ItemCreated {
        id: ItemId,
        kind: ItemKind,
        parent_id: ItemId,
    },
    ItemMoved {
        id: ItemId,
        from_parent: ItemId,
        to_parent: ItemId,
        index: usize,
    },
    OpenedFolderChanged(ItemId),
    DragItemChanged(Option<ItemId>),
}

/// Fan-out of events to every live receiver
#[derive(Debug, Default)]
pub(crate) struct Subscribers {
    senders: Vec<Sender<StoreEvent>>,
}

impl Subscribers {
    pub(crate) fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = channel();
        self.senders.push(tx);
        rx
    }

    /// Deliver to all receivers, dropping the ones that hung up.
    pub(crate) fn publish(&mut self, event: &StoreEvent) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.senders.len()
    }
}
