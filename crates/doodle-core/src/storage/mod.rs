//! Byte-slot persistence for the undo history.
//!
//! The history engine reads and writes whole serialized arrays through a
//! [`HistoryStore`] handle owned by one document session.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStore;

#[cfg(test)]
pub(crate) use memory::FailingStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

use thiserror::Error;

/// Slot holding completed actions.
pub const HISTORY_SLOT: &str = "history";

/// Slot holding undone actions.
pub const REDO_SLOT: &str = "redo";

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A named-slot byte store.
///
/// A missing slot reads as `Ok(None)`, which callers treat like an empty array.
pub trait HistoryStore {
    /// Read the full contents of a slot.
    fn read(&self, slot: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Replace the contents of a slot.
    fn write(&mut self, slot: &str, bytes: &[u8]) -> StorageResult<()>;

    /// Drop a slot. Removing a missing slot is not an error.
    fn remove(&mut self, slot: &str) -> StorageResult<()>;
}
