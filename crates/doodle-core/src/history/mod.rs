//! Undo/redo log of committed shape mutations.
//!
//! The log keeps every completed action on the undo stack in commit order and
//! mirrors each undone action onto the redo stack. The number of redo entries
//! is therefore the undo pointer: the newest `redo_len()` undo entries are the
//! undone future, and committing a new action discards that future.
//!
//! Both stacks are written back to a [`HistoryStore`] after every transition.
//! The log never mutates shapes; callers apply the returned records.

mod record;

pub use record::{ActionType, HistoryRecord};

use crate::storage::{HISTORY_SLOT, HistoryStore, REDO_SLOT, StorageError, StorageResult};

/// Coarse state of a [`HistoryLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    /// Nothing recorded.
    Clean,
    /// Actions recorded, none undone.
    HasUndo,
    /// At least one action undone and available for redo.
    HasRedoBranch,
}

/// Two-stack undo/redo log bound to one document session.
#[derive(Debug)]
pub struct HistoryLog<S: HistoryStore> {
    store: S,
    undo_stack: Vec<HistoryRecord>,
    redo_stack: Vec<HistoryRecord>,
}

impl<S: HistoryStore> HistoryLog<S> {
    /// Open the log persisted in `store`.
    ///
    /// Missing or unreadable slots start out empty.
    pub fn open(store: S) -> Self {
        let undo_stack = load_slot(&store, HISTORY_SLOT);
        let redo_stack = load_slot(&store, REDO_SLOT);
        log::debug!(
            "history opened: {} undo, {} redo",
            undo_stack.len(),
            redo_stack.len()
        );
        Self {
            store,
            undo_stack,
            redo_stack,
        }
    }

    /// Append a committed action.
    ///
    /// When redo entries are pending they are dropped, and the last
    /// `divergence_offset` undo entries are removed first (all of them when
    /// the offset is 0).
    pub fn record(&mut self, record: HistoryRecord, divergence_offset: usize) -> StorageResult<()> {
        if !self.redo_stack.is_empty() {
            self.redo_stack.clear();
            let keep = match divergence_offset {
                0 => 0,
                n => {
                    if n > self.undo_stack.len() {
                        log::warn!(
                            "divergence offset {} exceeds {} undo entries",
                            n,
                            self.undo_stack.len()
                        );
                    }
                    self.undo_stack.len().saturating_sub(n)
                }
            };
            self.undo_stack.truncate(keep);
        }

        log::debug!(
            "history record: {:?} {} #{}",
            record.action_type,
            record.kind,
            record.id
        );
        self.undo_stack.push(record);
        self.persist()
    }

    /// Append a committed action, discarding exactly the undone entries.
    pub fn push(&mut self, record: HistoryRecord) -> StorageResult<()> {
        let undone = self.undone_count();
        self.record(record, undone)
    }

    /// Step back one action.
    ///
    /// Returns the record that was undone so the caller can revert the live
    /// shape, or `None` when nothing is left to undo. A failed write leaves
    /// the log unchanged.
    pub fn undo(&mut self) -> StorageResult<Option<HistoryRecord>> {
        let Some(index) = self.undo_stack.len().checked_sub(self.redo_stack.len() + 1) else {
            return Ok(None);
        };
        let record = self.undo_stack[index].clone();
        self.redo_stack.push(record.clone());
        if let Err(e) = self.persist() {
            // Step back so the log still matches the caller's shapes
            self.redo_stack.pop();
            return Err(e);
        }
        log::debug!("history undo: #{} ({} undone)", record.id, self.redo_stack.len());
        Ok(Some(record))
    }

    /// Re-apply the most recently undone action.
    ///
    /// Returns the record for the caller to re-apply, or `None` when the redo
    /// stack is empty. A failed write leaves the log unchanged.
    pub fn redo(&mut self) -> StorageResult<Option<HistoryRecord>> {
        let Some(record) = self.redo_stack.pop() else {
            return Ok(None);
        };
        if let Err(e) = self.persist() {
            self.redo_stack.push(record);
            return Err(e);
        }
        log::debug!("history redo: #{} ({} undone)", record.id, self.redo_stack.len());
        Ok(Some(record))
    }

    /// Record `offset` positions back from the top of the undo stack.
    ///
    /// Empty when every recorded action has been undone.
    pub fn peek(&self, offset: usize) -> Option<&HistoryRecord> {
        if self.undo_stack.len() == self.redo_stack.len() {
            return None;
        }
        let index = self.undo_stack.len().checked_sub(offset + 1)?;
        self.undo_stack.get(index)
    }

    /// The most recent earlier record for the same shape as the record at `offset`.
    ///
    /// This is the geometry to restore when undoing a move or resize.
    pub fn previous_state(&self, offset: usize) -> Option<&HistoryRecord> {
        let index = self.undo_stack.len().checked_sub(offset + 1)?;
        let id = self.undo_stack[index].id;
        self.undo_stack[..index].iter().rev().find(|r| r.id == id)
    }

    /// Drop the newest undo entry, e.g. for a cancelled gesture.
    ///
    /// Does nothing while redo entries are pending.
    pub fn discard_last(&mut self) -> StorageResult<Option<HistoryRecord>> {
        if !self.redo_stack.is_empty() {
            return Ok(None);
        }
        let Some(record) = self.undo_stack.pop() else {
            return Ok(None);
        };
        self.persist()?;
        Ok(Some(record))
    }

    /// Forget all history and drop both slots from the store.
    pub fn clear(&mut self) -> StorageResult<()> {
        self.undo_stack.clear();
        self.redo_stack.clear();
        log::debug!("history cleared");
        self.store.remove(HISTORY_SLOT)?;
        self.store.remove(REDO_SLOT)
    }

    pub fn state(&self) -> HistoryState {
        if !self.redo_stack.is_empty() {
            HistoryState::HasRedoBranch
        } else if !self.undo_stack.is_empty() {
            HistoryState::HasUndo
        } else {
            HistoryState::Clean
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > self.redo_stack.len()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Number of recorded actions currently undone.
    pub fn undone_count(&self) -> usize {
        self.redo_stack.len().min(self.undo_stack.len())
    }

    /// Undo stack, oldest first.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.undo_stack
    }

    /// Redo stack, oldest first.
    pub fn redo_records(&self) -> &[HistoryRecord] {
        &self.redo_stack
    }

    /// Get a reference to the storage backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Release the storage backend.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) -> StorageResult<()> {
        let history = encode(&self.undo_stack)?;
        let redo = encode(&self.redo_stack)?;
        self.store.write(HISTORY_SLOT, &history)?;
        self.store.write(REDO_SLOT, &redo)
    }
}

fn encode(records: &[HistoryRecord]) -> StorageResult<Vec<u8>> {
    serde_json::to_vec(records).map_err(|e| StorageError::Serialization(e.to_string()))
}

fn load_slot<S: HistoryStore>(store: &S, slot: &str) -> Vec<HistoryRecord> {
    match store.read(slot) {
        Ok(Some(bytes)) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            log::warn!("Discarding unreadable {} slot: {}", slot, e);
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(e) => {
            log::warn!("Failed to read {} slot: {}", slot, e);
            Vec::new()
        }
    }
}
