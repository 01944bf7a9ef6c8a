//! # Capture Dialog
//!
//! The modal step between a map click and a new note:
//!
//! ```text
//!            click(c)                      confirm (draft not blank, add ok)
//!  Closed ─────────────▶ Open(c, "") ──────────────────────────────────────▶ Closed
//!    ▲                     │  ▲  │
//!    │       cancel        │  │  │ edit / click (see ClickWhileOpen)
//!    └─────────────────────┘  └──┘
//! ```
//!
//! A confirm that fails (blank draft, rejected by the store) leaves the dialog
//! open with its draft, so the user can fix it.

use crate::error::{RadarError, Result};
use crate::model::{Coordinate, EMPTY_NOTE_MESSAGE};
use serde::{Deserialize, Serialize};

/// What a map click does while the dialog is already open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickWhileOpen {
    /// Move the dialog to the new coordinate, keeping the draft.
    #[default]
    Retarget,
    /// Keep the original coordinate.
    Ignore,
}

/// Result of a map click, for the caller to report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    Opened(Coordinate),
    Retargeted { from: Coordinate, to: Coordinate },
    Ignored(Coordinate),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum CaptureDialog {
    #[default]
    Closed,
    Open { coordinate: Coordinate, draft: String },
}

impl CaptureDialog {
    pub fn is_open(&self) -> bool {
        matches!(self, CaptureDialog::Open { .. })
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            CaptureDialog::Open { coordinate, .. } => Some(*coordinate),
            CaptureDialog::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            CaptureDialog::Open { draft, .. } => Some(draft),
            CaptureDialog::Closed => None,
        }
    }

    pub fn click(&mut self, at: Coordinate, policy: ClickWhileOpen) -> ClickOutcome {
        match self {
            CaptureDialog::Closed => {
                *self = CaptureDialog::Open {
                    coordinate: at,
                    draft: String::new(),
                };
                ClickOutcome::Opened(at)
            }
            CaptureDialog::Open { coordinate, .. } => match policy {
                ClickWhileOpen::Retarget => {
                    let from = *coordinate;
                    *coordinate = at;
                    ClickOutcome::Retargeted { from, to: at }
                }
                ClickWhileOpen::Ignore => ClickOutcome::Ignored(*coordinate),
            },
        }
    }

    /// Replaces the draft text.
    pub fn edit(&mut self, text: &str) -> Result<()> {
        match self {
            CaptureDialog::Open { draft, .. } => {
                *draft = text.to_string();
                Ok(())
            }
            CaptureDialog::Closed => Err(RadarError::DialogClosed),
        }
    }

    /// Whether the Add button is enabled.
    pub fn can_confirm(&self) -> bool {
        self.draft().is_some_and(|d| !d.trim().is_empty())
    }

    /// Inline feedback shown under the text field, if any.
    pub fn feedback(&self) -> Option<&'static str> {
        match self {
            CaptureDialog::Open { .. } if !self.can_confirm() => Some(EMPTY_NOTE_MESSAGE),
            _ => None,
        }
    }

    /// Hands the held coordinate and draft to `add`, closing only when it succeeds.
    pub fn confirm<T, F>(&mut self, add: F) -> Result<T>
    where
        F: FnOnce(Coordinate, &str) -> Result<T>,
    {
        let (coordinate, draft) = match self {
            CaptureDialog::Open { coordinate, draft } => (*coordinate, draft.as_str()),
            CaptureDialog::Closed => return Err(RadarError::DialogClosed),
        };
        if draft.trim().is_empty() {
            return Err(RadarError::Validation(EMPTY_NOTE_MESSAGE.to_string()));
        }
        let added = add(coordinate, draft)?;
        *self = CaptureDialog::Closed;
        Ok(added)
    }

    /// Discards coordinate and draft. Returns whether the dialog was open.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.is_open();
        *self = CaptureDialog::Closed;
        was_open
    }
}
