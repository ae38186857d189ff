//! # Storage Layer
//!
//! The [`DataStore`] trait moves raw bytes between a named file and memory.
//! It knows nothing about users or JSON: decoding lives in [`crate::codec`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - `load` creates the file when it is missing and returns its bytes
//!   - `store` truncates and rewrites the whole file
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Durability
//!
//! Writes are not atomic. A crash halfway through `store` can leave a
//! truncated file behind, and two processes writing the same file race
//! with last-writer-wins semantics.

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for whole-file storage.
///
/// Every call opens, drains or fills, and releases its file before returning.
pub trait DataStore {
    /// Read the full contents of `path`, creating an empty file if absent.
    fn load(&self, path: &Path) -> Result<Vec<u8>>;

    /// Replace the full contents of `path` with `bytes`.
    fn store(&self, path: &Path, bytes: &[u8]) -> Result<()>;
}
