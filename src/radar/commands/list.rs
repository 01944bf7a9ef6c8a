use crate::commands::{CmdMessage, CmdResult, EMPTY_LIST_MESSAGE};
use crate::notes::NoteStore;
use crate::store::KeyValueStore;

/// The sidebar: every note in collection order.
pub fn run<S: KeyValueStore>(store: &NoteStore<S>) -> CmdResult {
    let result = CmdResult::default().with_listed_notes(store.notes().to_vec());
    if store.notes().is_empty() {
        return result.with_message(CmdMessage::info(EMPTY_LIST_MESSAGE));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::IdPolicy;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_shows_placeholder() {
        let store = NoteStore::load_initial(InMemoryStore::new(), IdPolicy::Positional);
        let result = run(&store);
        assert!(result.listed_notes.is_empty());
        assert_eq!(result.messages[0].content, EMPTY_LIST_MESSAGE);
    }

    #[test]
    fn lists_in_insertion_order() {
        let fixture = StoreFixture::new().with_notes(3);
        let store = NoteStore::load_initial(fixture.store, IdPolicy::Positional);
        let result = run(&store);

        let texts: Vec<_> = result.listed_notes.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["Note 1", "Note 2", "Note 3"]);
        assert!(result.messages.is_empty());
    }
}
