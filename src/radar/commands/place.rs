use crate::commands::{CmdMessage, CmdResult};
use crate::dialog::CaptureDialog;
use crate::error::Result;
use crate::notes::NoteStore;
use crate::store::KeyValueStore;

/// Confirms the open dialog, adding its draft as a note.
pub fn confirm<S: KeyValueStore>(
    dialog: &mut CaptureDialog,
    store: &mut NoteStore<S>,
) -> Result<CmdResult> {
    let notes = dialog.confirm(|coordinate, text| {
        store.add(coordinate, text).map(|notes| notes.to_vec())
    })?;

    let mut result = CmdResult::default();
    if let Some(note) = notes.last() {
        result.add_message(CmdMessage::success(format!(
            "Note added ({}): {}",
            note.id, note.text
        )));
        result.affected_notes.push(note.clone());
    }
    Ok(result.with_listed_notes(notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::ClickWhileOpen;
    use crate::error::RadarError;
    use crate::model::Coordinate;
    use crate::notes::IdPolicy;
    use crate::store::memory::InMemoryStore;

    fn open(dialog: &mut CaptureDialog, lat: f64, lng: f64) {
        dialog.click(Coordinate::new(lat, lng), ClickWhileOpen::Retarget);
    }

    #[test]
    fn adds_first_note() {
        let mut store = NoteStore::load_initial(InMemoryStore::new(), IdPolicy::Positional);
        let mut dialog = CaptureDialog::default();
        open(&mut dialog, 27.9, 30.5);
        dialog.edit("test").unwrap();

        let result = confirm(&mut dialog, &mut store).unwrap();

        assert_eq!(result.affected_notes.len(), 1);
        assert_eq!(result.affected_notes[0].id, 1);
        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(store.notes()[0].coordinate, Coordinate::new(27.9, 30.5));
        assert!(!dialog.is_open());
    }

    #[test]
    fn blank_draft_keeps_dialog_and_store() {
        let mut store = NoteStore::load_initial(InMemoryStore::new(), IdPolicy::Positional);
        let mut dialog = CaptureDialog::default();
        open(&mut dialog, 1.0, 1.0);

        let err = confirm(&mut dialog, &mut store).unwrap_err();
        assert!(matches!(err, RadarError::Validation(_)));
        assert!(dialog.is_open());
        assert!(store.notes().is_empty());
    }

    #[test]
    fn confirm_without_dialog_errors() {
        let mut store = NoteStore::load_initial(InMemoryStore::new(), IdPolicy::Positional);
        let mut dialog = CaptureDialog::default();
        assert!(matches!(
            confirm(&mut dialog, &mut store),
            Err(RadarError::DialogClosed)
        ));
    }
}
