use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::notes::{IdPolicy, NoteStore};
use crate::store::KeyValueStore;

pub fn run<S: KeyValueStore>(store: &mut NoteStore<S>, id: u32) -> Result<CmdResult> {
    let removed = store.remove(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note deleted ({}): {}",
        id, removed.text
    )));
    if store.policy() == IdPolicy::Positional && (id as usize) <= store.notes().len() {
        result.add_message(CmdMessage::info("Remaining notes were renumbered"));
    }
    Ok(result
        .with_affected_notes(vec![removed])
        .with_listed_notes(store.notes().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RadarError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_and_lists_renumbered() {
        let fixture = StoreFixture::new().with_notes(3);
        let mut store = NoteStore::load_initial(fixture.store, IdPolicy::Positional);

        let result = run(&mut store, 2).unwrap();

        assert_eq!(result.affected_notes[0].text, "Note 2");
        let ids: Vec<_> = result.listed_notes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(result.listed_notes[1].text, "Note 3");
        assert_eq!(result.messages.len(), 2);
    }

    #[test]
    fn deleting_last_note_needs_no_renumbering() {
        let fixture = StoreFixture::new().with_notes(2);
        let mut store = NoteStore::load_initial(fixture.store, IdPolicy::Positional);
        let result = run(&mut store, 2).unwrap();
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let fixture = StoreFixture::new().with_notes(1);
        let mut store = NoteStore::load_initial(fixture.store, IdPolicy::Positional);
        assert!(matches!(run(&mut store, 5), Err(RadarError::NoteNotFound(5))));
        assert_eq!(store.notes().len(), 1);
    }
}
