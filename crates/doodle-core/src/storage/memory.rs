//! In-memory slot store.

use super::{HistoryStore, StorageResult};
use std::collections::HashMap;

#[cfg(test)]
use super::StorageError;
#[cfg(test)]
use std::{cell::Cell, rc::Rc};

/// In-memory storage for testing and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a slot is present.
    pub fn contains(&self, slot: &str) -> bool {
        self.slots.contains_key(slot)
    }
}

impl HistoryStore for MemoryStore {
    fn read(&self, slot: &str) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.slots.get(slot).cloned())
    }

    fn write(&mut self, slot: &str, bytes: &[u8]) -> StorageResult<()> {
        self.slots.insert(slot.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&mut self, slot: &str) -> StorageResult<()> {
        self.slots.remove(slot);
        Ok(())
    }
}

/// Memory store whose writes fail while `failing` is set.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FailingStore {
    inner: MemoryStore,
    pub(crate) failing: Rc<Cell<bool>>,
}

#[cfg(test)]
impl HistoryStore for FailingStore {
    fn read(&self, slot: &str) -> StorageResult<Option<Vec<u8>>> {
        self.inner.read(slot)
    }

    fn write(&mut self, slot: &str, bytes: &[u8]) -> StorageResult<()> {
        if self.failing.get() {
            return Err(StorageError::Io("disk full".to_string()));
        }
        self.inner.write(slot, bytes)
    }

    fn remove(&mut self, slot: &str) -> StorageResult<()> {
        self.inner.remove(slot)
    }
}
