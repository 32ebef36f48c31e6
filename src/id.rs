//! Identity generation for new items.

use crate::store::Snapshot;
use crate::types::ItemId;

/// Source of new item identifiers
pub trait IdGenerator: Send + Sync {
    fn next_id(&mut self) -> ItemId;
}

/// Random UUID v4 identifiers (default)
#[derive(Debug, Default, Clone)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> ItemId {
        ItemId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Deterministic `prefix-N` identifiers, mostly for tests and fixtures
#[derive(Debug, Clone)]
pub struct SequentialGenerator {
    prefix: String,
    next: u64,
}

impl SequentialGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&mut self) -> ItemId {
        let id = ItemId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

/// Draw ids until one is absent from the snapshot.
pub fn fresh_id(generator: &mut dyn IdGenerator, snapshot: &Snapshot) -> ItemId {
    loop {
        let id = generator.next_id();
        if !snapshot.contains(&id) {
            return id;
        }
        tracing::debug!(id = %id, "Generated id already in use, drawing again");
    }
}
