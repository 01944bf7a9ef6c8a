//! # API Facade
//!
//! [`RadarApi`] is the single controller object for a radar session. It owns
//! all application state:
//!
//! - the [`NoteStore`] (notes plus their persistence),
//! - the [`CaptureDialog`] (the note being written, if any),
//! - the [`MapView`] (center, zoom, viewport).
//!
//! A UI creates one `RadarApi` when its view mounts, forwards user intents to
//! it, and renders from the snapshots it hands back. Nothing else mutates the
//! notes.
//!
//! Like the command layer below it, the API never writes to stdout or
//! stderr; it returns `Result<CmdResult>` for the client to present.
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `RadarApi<FileStore>`
//! - Testing: `RadarApi<InMemoryStore>`

use crate::commands::{self, CmdResult, RadarPaths};
use crate::config::RadarConfig;
use crate::dialog::CaptureDialog;
use crate::error::Result;
use crate::map::MapView;
use crate::model::{Coordinate, Note};
use crate::notes::NoteStore;
use crate::store::KeyValueStore;

pub struct RadarApi<S: KeyValueStore> {
    notes: NoteStore<S>,
    dialog: CaptureDialog,
    map: MapView,
    config: RadarConfig,
    paths: RadarPaths,
}

impl<S: KeyValueStore> RadarApi<S> {
    /// Loads the stored notes and sets up the map from `config`.
    pub fn new(backend: S, config: RadarConfig, paths: RadarPaths) -> Self {
        Self {
            notes: NoteStore::load_initial(backend, config.id_policy),
            dialog: CaptureDialog::default(),
            map: MapView::new(&config.map),
            config,
            paths,
        }
    }

    pub fn notes(&self) -> &[Note] {
        self.notes.notes()
    }

    pub fn dialog(&self) -> &CaptureDialog {
        &self.dialog
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    // --- Capture dialog ---

    pub fn click_map(&mut self, x: f64, y: f64) -> Result<CmdResult> {
        commands::capture::click_pixel(
            &mut self.dialog,
            &self.map,
            self.config.click_while_open,
            x,
            y,
        )
    }

    pub fn click_at(&mut self, at: Coordinate) -> Result<CmdResult> {
        commands::capture::click_at(&mut self.dialog, self.config.click_while_open, at)
    }

    pub fn edit_draft(&mut self, text: &str) -> Result<CmdResult> {
        commands::capture::edit(&mut self.dialog, text)
    }

    pub fn confirm_note(&mut self) -> Result<CmdResult> {
        commands::place::confirm(&mut self.dialog, &mut self.notes)
    }

    pub fn cancel_note(&mut self) -> CmdResult {
        commands::capture::cancel(&mut self.dialog)
    }

    /// Click, type and confirm in one go. Any draft already open is discarded.
    pub fn place_note(&mut self, at: Coordinate, text: &str) -> Result<CmdResult> {
        self.dialog.cancel();
        self.click_at(at)?;
        self.finish_placing(text)
    }

    /// Like [`place_note`](Self::place_note), starting from a viewport pixel.
    pub fn place_note_at_pixel(&mut self, x: f64, y: f64, text: &str) -> Result<CmdResult> {
        self.dialog.cancel();
        self.click_map(x, y)?;
        self.finish_placing(text)
    }

    fn finish_placing(&mut self, text: &str) -> Result<CmdResult> {
        self.edit_draft(text)?;
        let result = self.confirm_note();
        if result.is_err() {
            self.dialog.cancel();
        }
        result
    }

    // --- Notes ---

    pub fn delete_note(&mut self, id: u32) -> Result<CmdResult> {
        commands::delete::run(&mut self.notes, id)
    }

    pub fn list_notes(&self) -> CmdResult {
        commands::list::run(&self.notes)
    }

    pub fn markers(&self) -> CmdResult {
        commands::markers::run(&self.notes, &self.map)
    }

    // --- Map view ---

    pub fn zoom_in(&mut self) -> u8 {
        self.map.zoom_in()
    }

    pub fn zoom_out(&mut self) -> u8 {
        self.map.zoom_out()
    }

    pub fn set_zoom(&mut self, zoom: u8) -> u8 {
        self.map.set_zoom(zoom)
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) -> Result<Coordinate> {
        self.map.pan_by(dx, dy)
    }

    // --- Config ---

    /// Runs a config action. Saved changes take effect for new sessions.
    pub fn configure(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, MessageLevel, EMPTY_LIST_MESSAGE};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::ClickWhileOpen;
    use crate::error::RadarError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn paths() -> RadarPaths {
        RadarPaths {
            data_dir: PathBuf::from("/nonexistent/radar"),
        }
    }

    fn api() -> RadarApi<InMemoryStore> {
        RadarApi::new(InMemoryStore::new(), RadarConfig::default(), paths())
    }

    #[test]
    fn starts_empty_with_placeholder() {
        let api = api();
        assert!(api.notes().is_empty());
        assert!(!api.dialog().is_open());
        assert_eq!(api.list_notes().messages[0].content, EMPTY_LIST_MESSAGE);
    }

    #[test]
    fn click_type_confirm_flow() {
        let mut api = api();
        api.click_at(Coordinate::new(27.9, 30.5)).unwrap();
        api.edit_draft("test").unwrap();
        api.confirm_note().unwrap();

        assert!(!api.dialog().is_open());
        assert_eq!(api.notes().len(), 1);
        assert_eq!(api.notes()[0].id, 1);
        assert_eq!(api.notes()[0].text, "test");
    }

    #[test]
    fn cancel_leaves_store_unchanged() {
        let mut api = api();
        api.click_at(Coordinate::new(10.123, 20.456)).unwrap();
        api.edit_draft("never mind").unwrap();
        api.cancel_note();

        assert_eq!(*api.dialog(), CaptureDialog::Closed);
        assert!(api.notes().is_empty());
    }

    #[test]
    fn place_note_rejects_blank_and_closes_dialog() {
        let mut api = api();
        let err = api.place_note(Coordinate::new(1.0, 1.0), "   ").unwrap_err();
        assert!(matches!(err, RadarError::Validation(_)));
        assert!(api.notes().is_empty());
        assert!(!api.dialog().is_open());
    }

    #[test]
    fn place_note_at_map_center_pixel() {
        let mut api = api();
        api.place_note_at_pixel(512.0, 384.0, "center").unwrap();
        let c = api.notes()[0].coordinate;
        assert!((c.lat - 27.89).abs() < 1e-6);
        assert!((c.lng - 30.53).abs() < 1e-6);
    }

    #[test]
    fn delete_renumbers_through_api() {
        let fixture = StoreFixture::new().with_notes(3);
        let mut api = RadarApi::new(fixture.store, RadarConfig::default(), paths());
        api.delete_note(1).unwrap();
        let ids: Vec<_> = api.notes().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(api.notes()[0].text, "Note 2");
    }

    #[test]
    fn config_policy_reaches_dialog() {
        let mut config = RadarConfig::default();
        config.click_while_open = ClickWhileOpen::Ignore;
        let mut api = RadarApi::new(InMemoryStore::new(), config, paths());

        api.click_at(Coordinate::new(1.0, 1.0)).unwrap();
        api.click_at(Coordinate::new(5.0, 5.0)).unwrap();
        assert_eq!(api.dialog().coordinate(), Some(Coordinate::new(1.0, 1.0)));
    }

    #[test]
    fn rejected_pan_leaves_clicks_usable() {
        let mut api = api();
        assert!(api.pan_by(f64::NAN, 0.0).is_err());
        assert_eq!(api.map().center(), Coordinate::new(27.89, 30.53));

        api.place_note_at_pixel(512.0, 384.0, "still works").unwrap();
        assert_eq!(api.notes().len(), 1);
    }

    #[test]
    fn zoom_stays_within_configured_bounds() {
        let mut api = api();
        for _ in 0..10 {
            api.zoom_in();
        }
        assert_eq!(api.map().zoom(), 8);
        assert_eq!(api.set_zoom(0), 1);
    }
}
