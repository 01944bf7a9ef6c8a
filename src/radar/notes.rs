//! # Note Store
//!
//! The authoritative, ordered note collection.
//!
//! Every operation builds a new collection from the previous one instead of
//! editing it in place; [`NoteStore`] swaps the new collection in and writes
//! it out whole.
//!
//! ## Ids
//!
//! A note's id is its display and removal key. With [`IdPolicy::Positional`]
//! ids are re-assigned to `1..=n` after every removal, so an id only means
//! "the n-th note right now". A reference held across a removal may point at a
//! different note afterwards. [`IdPolicy::Stable`] keeps ids as assigned.

use crate::error::{RadarError, Result};
use crate::model::{normalize_text, Coordinate, Note};
use crate::store::persistence::Persistence;
use crate::store::KeyValueStore;
use log::{info, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdPolicy {
    /// Renumber to `1..=n` in display order after each removal.
    #[default]
    Positional,
    /// Ids are assigned once on creation and never change.
    Stable,
}

/// Id for the next note: one past the largest id in use, or 1.
///
/// Fails when the largest id is already `u32::MAX`.
pub fn next_id(notes: &[Note]) -> Result<u32> {
    match notes.iter().map(|n| n.id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| RadarError::Store(format!("No note id left after {}", max))),
    }
}

/// Returns a new collection with a note appended.
///
/// The text is stored trimmed. Blank text and invalid coordinates are
/// rejected, and `notes` is left untouched either way.
pub fn with_note_added(notes: &[Note], coordinate: Coordinate, text: &str) -> Result<Vec<Note>> {
    let text = normalize_text(text)?;
    coordinate.validate()?;

    let id = next_id(notes)?;
    let mut next = notes.to_vec();
    next.push(Note::new(id, coordinate, text.to_string()));
    Ok(next)
}

/// Returns a new collection without the note `id`.
///
/// An unknown id yields an unchanged copy.
pub fn with_note_removed(notes: &[Note], id: u32, policy: IdPolicy) -> Vec<Note> {
    let filtered = notes.iter().filter(|n| n.id != id).cloned();
    match policy {
        IdPolicy::Positional => filtered
            .enumerate()
            .map(|(idx, note)| Note {
                id: idx as u32 + 1,
                ..note
            })
            .collect(),
        IdPolicy::Stable => filtered.collect(),
    }
}

pub struct NoteStore<S: KeyValueStore> {
    notes: Vec<Note>,
    persistence: Persistence<S>,
    policy: IdPolicy,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Loads the persisted collection. Never fails: missing or unreadable
    /// data starts an empty collection.
    pub fn load_initial(backend: S, policy: IdPolicy) -> Self {
        let persistence = Persistence::new(backend);
        let notes = persistence.load_notes();
        info!(
            "event=store_open module=notes status=ok count={} policy={:?}",
            notes.len(),
            policy
        );
        Self {
            notes,
            persistence,
            policy,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    pub fn get(&self, id: u32) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn backend(&self) -> &S {
        self.persistence.backend()
    }

    pub fn add(&mut self, coordinate: Coordinate, text: &str) -> Result<&[Note]> {
        let next = with_note_added(&self.notes, coordinate, text)?;
        self.replace(next);
        Ok(&self.notes)
    }

    /// Removes `id`; returns `NoteNotFound` without touching storage when absent.
    pub fn remove(&mut self, id: u32) -> Result<Note> {
        let removed = self.get(id).cloned().ok_or(RadarError::NoteNotFound(id))?;
        let next = with_note_removed(&self.notes, id, self.policy);
        self.replace(next);
        Ok(removed)
    }

    fn replace(&mut self, next: Vec<Note>) {
        self.notes = next;
        // A failed write only logs; the in-memory collection stays current
        if let Err(err) = self.persistence.save(&self.notes) {
            warn!(
                "event=notes_save module=notes status=error error_code=write_failed count={} error={}",
                self.notes.len(),
                err
            );
        }
    }
}
