//! Map clicks and draft edits: everything that happens while a note is being
//! written but before it exists.

use crate::commands::{CmdMessage, CmdResult};
use crate::dialog::{CaptureDialog, ClickOutcome, ClickWhileOpen};
use crate::error::Result;
use crate::map::MapView;
use crate::model::Coordinate;
use log::debug;

/// A click on the map at viewport pixel `(x, y)`.
pub fn click_pixel(
    dialog: &mut CaptureDialog,
    view: &MapView,
    policy: ClickWhileOpen,
    x: f64,
    y: f64,
) -> Result<CmdResult> {
    let at = view.coordinate_at(x, y)?;
    click_at(dialog, policy, at)
}

/// A click on the map that landed on `at`.
pub fn click_at(
    dialog: &mut CaptureDialog,
    policy: ClickWhileOpen,
    at: Coordinate,
) -> Result<CmdResult> {
    at.validate()?;
    let outcome = dialog.click(at, policy);
    debug!(
        "event=map_click module=capture status=ok outcome={:?}",
        outcome
    );

    let message = match outcome {
        ClickOutcome::Opened(c) => CmdMessage::info(format!("Add Note  {}", c)),
        ClickOutcome::Retargeted { to, .. } => CmdMessage::info(format!("Add Note  {}", to)),
        ClickOutcome::Ignored(c) => CmdMessage::warning(format!(
            "A note is already being added at {}; finish or cancel it first",
            c
        )),
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn edit(dialog: &mut CaptureDialog, text: &str) -> Result<CmdResult> {
    dialog.edit(text)?;
    let mut result = CmdResult::default();
    if let Some(feedback) = dialog.feedback() {
        result.add_message(CmdMessage::warning(feedback));
    }
    Ok(result)
}

pub fn cancel(dialog: &mut CaptureDialog) -> CmdResult {
    if dialog.cancel() {
        CmdResult::default().with_message(CmdMessage::info("Cancelled"))
    } else {
        CmdResult::default().with_message(CmdMessage::info("Nothing to cancel"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::RadarError;

    #[test]
    fn click_opens_dialog_at_pixel() {
        let mut dialog = CaptureDialog::default();
        let view = MapView::default();
        let result =
            click_pixel(&mut dialog, &view, ClickWhileOpen::Retarget, 512.0, 384.0).unwrap();

        assert!(dialog.is_open());
        assert!(result.messages[0].content.contains("27.890, 30.530"));
    }

    #[test]
    fn ignored_click_warns() {
        let mut dialog = CaptureDialog::default();
        click_at(&mut dialog, ClickWhileOpen::Ignore, Coordinate::new(1.0, 1.0)).unwrap();
        let result =
            click_at(&mut dialog, ClickWhileOpen::Ignore, Coordinate::new(2.0, 2.0)).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(dialog.coordinate(), Some(Coordinate::new(1.0, 1.0)));
    }

    #[test]
    fn invalid_click_leaves_dialog_closed() {
        let mut dialog = CaptureDialog::default();
        let err = click_at(
            &mut dialog,
            ClickWhileOpen::Retarget,
            Coordinate::new(120.0, 0.0),
        )
        .unwrap_err();
        assert!(matches!(err, RadarError::Validation(_)));
        assert!(!dialog.is_open());
    }

    #[test]
    fn blank_edit_reports_feedback() {
        let mut dialog = CaptureDialog::default();
        click_at(&mut dialog, ClickWhileOpen::Retarget, Coordinate::new(1.0, 1.0)).unwrap();
        let result = edit(&mut dialog, "  ").unwrap();
        assert_eq!(result.messages[0].content, "Note cannot be empty");

        let result = edit(&mut dialog, "fine").unwrap();
        assert!(result.messages.is_empty());
    }

    #[test]
    fn cancel_at_10_123_20_456_closes() {
        let mut dialog = CaptureDialog::default();
        click_at(
            &mut dialog,
            ClickWhileOpen::Retarget,
            Coordinate::new(10.123, 20.456),
        )
        .unwrap();
        cancel(&mut dialog);
        assert_eq!(dialog, CaptureDialog::Closed);
    }
}
