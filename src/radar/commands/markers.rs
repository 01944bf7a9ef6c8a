use crate::commands::{CmdMessage, CmdResult};
use crate::map::marker::marker_layer;
use crate::map::MapView;
use crate::notes::NoteStore;
use crate::store::KeyValueStore;

/// The marker layer for the current view.
pub fn run<S: KeyValueStore>(store: &NoteStore<S>, view: &MapView) -> CmdResult {
    let markers = marker_layer(store.notes(), view);
    let hidden = markers.iter().filter(|m| !m.visible).count();

    let mut result = CmdResult::default();
    if hidden > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} of {} markers are outside the current view",
            hidden,
            markers.len()
        )));
    }
    result.with_markers(markers)
}
