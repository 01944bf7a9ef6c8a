use super::KeyValueStore;
use crate::error::{RadarError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Uses `RefCell` for interior mutability since radar is single-threaded.
#[derive(Default)]
pub struct InMemoryStore {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(RadarError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn location(&self, key: &str) -> String {
        format!("memory://{}", key)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Coordinate, Note};
    use crate::store::persistence::{encode_notes, NOTES_KEY};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        notes: Vec<Note>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                notes: Vec::new(),
            }
        }

        /// Seeds `count` notes with ids `1..=count`, spread along the equator.
        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = self.notes.len() as u32 + 1;
                let text = format!("Note {}", i + 1);
                self.notes
                    .push(Note::new(id, Coordinate::new(0.0, i as f64), text));
            }
            self.flush()
        }

        pub fn with_note(mut self, text: &str, coordinate: Coordinate) -> Self {
            let id = self.notes.len() as u32 + 1;
            self.notes.push(Note::new(id, coordinate, text.to_string()));
            self.flush()
        }

        /// Stores a raw value under the notes key, bypassing encoding.
        pub fn with_raw(self, raw: &str) -> Self {
            self.store.set(NOTES_KEY, raw).unwrap();
            self
        }

        fn flush(self) -> Self {
            let encoded = encode_notes(&self.notes).unwrap();
            self.store.set(NOTES_KEY, &encoded).unwrap();
            self
        }
    }
}
