//! Persistence adapter for the note collection.
//!
//! The whole collection lives under a single key as a JSON array:
//!
//! ```text
//! [{"id": 1, "geocode": [27.9, 30.5], "note": "test", "createdAt": "2024-05-01T10:00:00Z"}]
//! ```
//!
//! There is no schema version. Changing this layout breaks existing data.

use super::KeyValueStore;
use crate::error::{RadarError, Result};
use crate::model::Note;
use log::{debug, warn};

/// The fixed key holding the note collection.
pub const NOTES_KEY: &str = "markers";

pub fn encode_notes(notes: &[Note]) -> Result<String> {
    serde_json::to_string(notes).map_err(RadarError::Serialization)
}

pub fn decode_notes(raw: &str) -> Result<Vec<Note>> {
    serde_json::from_str(raw).map_err(RadarError::Serialization)
}

pub struct Persistence<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Serializes the full collection and overwrites the stored value.
    pub fn save(&self, notes: &[Note]) -> Result<()> {
        let encoded = encode_notes(notes)?;
        self.backend.set(NOTES_KEY, &encoded)?;
        debug!(
            "event=notes_save module=store status=ok count={} location={}",
            notes.len(),
            self.backend.location(NOTES_KEY)
        );
        Ok(())
    }

    /// Raw stored text, or `None` when nothing was ever saved.
    pub fn load(&self) -> Result<Option<String>> {
        self.backend.get(NOTES_KEY)
    }

    /// Loads and decodes the collection, falling back to empty on any failure.
    pub fn load_notes(&self) -> Vec<Note> {
        let raw = match self.load() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=notes_load module=store status=skipped reason=absent");
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=notes_load module=store status=error error_code=read_failed error={}",
                    err
                );
                return Vec::new();
            }
        };

        match decode_notes(&raw) {
            Ok(notes) => {
                debug!(
                    "event=notes_load module=store status=ok count={}",
                    notes.len()
                );
                notes
            }
            Err(err) => {
                warn!(
                    "event=notes_load module=store status=error error_code=decode_failed error={}",
                    err
                );
                Vec::new()
            }
        }
    }
}
