//! # Storage Layer
//!
//! Notes are persisted through a tiny key-value abstraction, the
//! [`KeyValueStore`] trait. Values are plain strings, so everything stored
//! must round-trip through text.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - One file per key inside the data directory: `{key}.json`
//!   - Writes go to a temp file and are renamed into place
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! ```text
//! $RADAR_HOME/
//! ├── markers.json     # The whole note collection (JSON array)
//! └── config.json      # Map and behavior settings
//! ```
//!
//! The note collection is always written whole. There is no incremental
//! update and no schema version: see [`persistence`] for the layout.

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod persistence;

/// Abstract interface for raw string storage.
///
/// All methods take `&self`; implementations needing mutation use interior
/// mutability since the application is single-threaded.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    /// Returns Ok(None) when nothing has been stored yet.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Human-readable location of `key`, for diagnostics.
    fn location(&self, key: &str) -> String;
}
