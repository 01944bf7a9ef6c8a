//! # Rendering
//!
//! Turns API snapshots into terminal text. Every function returns a `String`
//! so output can be tested without a terminal; the handlers decide where it
//! goes.

use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use radar::api::{CmdMessage, MessageLevel};
use radar::config::{RadarConfig, CONFIG_KEYS};
use radar::dialog::CaptureDialog;
use radar::map::marker::{Marker, MARKER_ICON};
use radar::map::MapView;
use radar::model::Note;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const TEXT_INDENT: &str = "    ";
const TIME_WIDTH: usize = 16;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

/// The sidebar: header line per note (id, coordinate, time) then its text.
pub fn render_note_list(notes: &[Note]) -> String {
    let mut out = String::new();
    for note in notes {
        let idx = format!("{}. ", note.id);
        let geocode = note.coordinate.to_string();
        let created = format_local(note.created_at);
        let age = format_time_ago(note.created_at);

        let used = idx.width() + geocode.width() + 2 + created.width();
        let padding = LINE_WIDTH.saturating_sub(used + TIME_WIDTH);

        out.push_str(&format!(
            "{}{}  {}{}{}\n",
            idx.yellow(),
            geocode.cyan(),
            created,
            " ".repeat(padding),
            age.dimmed()
        ));

        let available = LINE_WIDTH.saturating_sub(TEXT_INDENT.width());
        for line in note.text.lines() {
            out.push_str(&format!(
                "{}{}\n",
                TEXT_INDENT,
                truncate_to_width(line, available)
            ));
        }
    }
    out
}

pub fn render_markers(markers: &[Marker]) -> String {
    let mut out = String::new();
    for marker in markers {
        let placement = format!("({:.0}, {:.0})", marker.position.x, marker.position.y);
        let status = if marker.visible {
            "".normal()
        } else {
            "off-screen".dimmed()
        };
        out.push_str(&format!(
            "{} {}  at {} {}\n",
            format!("#{}", marker.note_id).yellow(),
            marker.coordinate.to_string().cyan(),
            placement,
            status
        ));
        out.push_str(&format!(
            "{}{}\n",
            TEXT_INDENT,
            truncate_to_width(&marker.popup.text, LINE_WIDTH - TEXT_INDENT.width()).bold()
        ));
        out.push_str(&format!(
            "{}{}\n",
            TEXT_INDENT,
            format!("Added on: {}", format_local(marker.popup.created_at)).italic()
        ));
    }
    out
}

/// The capture dialog, or an empty string when it is closed.
pub fn render_dialog(dialog: &CaptureDialog) -> String {
    let (Some(coordinate), Some(draft)) = (dialog.coordinate(), dialog.draft()) else {
        return String::new();
    };

    let mut out = String::new();
    out.push_str(&format!("{}  {}\n", "Add Note".bold(), coordinate.to_string().cyan()));
    if draft.is_empty() {
        out.push_str(&format!("{}{}\n", TEXT_INDENT, "Enter your note...".dimmed()));
    } else {
        for line in draft.lines() {
            out.push_str(&format!("{}{}\n", TEXT_INDENT, line));
        }
    }
    if let Some(feedback) = dialog.feedback() {
        out.push_str(&format!("{}{}\n", TEXT_INDENT, feedback.red()));
    }
    let add = if dialog.can_confirm() {
        "[add]".green()
    } else {
        "[add]".dimmed()
    };
    out.push_str(&format!("{}{} {}\n", TEXT_INDENT, add, "[cancel]"));
    out
}

pub fn render_map(view: &MapView) -> String {
    let (min, max) = view.zoom_bounds();
    let viewport = view.viewport();
    format!(
        "center {}  zoom {} ({}-{})  viewport {}x{}  marker {} {}x{}\n",
        view.center().to_string().cyan(),
        view.zoom(),
        min,
        max,
        viewport.width,
        viewport.height,
        MARKER_ICON.asset,
        MARKER_ICON.size.0,
        MARKER_ICON.size.1
    )
}

pub fn render_config(config: &RadarConfig) -> String {
    let mut out = String::new();
    for key in CONFIG_KEYS {
        if let Ok(value) = config.get(key) {
            out.push_str(&format!("{} = {}\n", key, value));
        }
    }
    out
}

fn format_local(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use radar::dialog::ClickWhileOpen;
    use radar::model::Coordinate;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn list_shows_id_geocode_and_text() {
        plain();
        let notes = vec![Note::new(1, Coordinate::new(27.9, 30.5), "test".into())];
        let out = render_note_list(&notes);
        assert!(out.starts_with("1. 27.900, 30.500"));
        assert!(out.contains("    test\n"));
        assert!(out.contains("now") || out.contains("ago"));
    }

    #[test]
    fn multi_line_text_is_indented() {
        plain();
        let notes = vec![Note::new(1, Coordinate::new(0.0, 0.0), "one\ntwo".into())];
        let out = render_note_list(&notes);
        assert!(out.contains("    one\n    two\n"));
    }

    #[test]
    fn markers_show_popup() {
        plain();
        let view = MapView::default();
        let note = Note::new(3, view.center(), "pinned".into());
        let markers = vec![Marker::place(&note, &view, &MARKER_ICON)];
        let out = render_markers(&markers);
        assert!(out.starts_with("#3 27.890, 30.530  at (512, 384)"));
        assert!(out.contains("pinned"));
        assert!(out.contains("Added on: "));
        assert!(!out.contains("off-screen"));
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        assert_eq!(render_dialog(&CaptureDialog::Closed), "");
    }

    #[test]
    fn open_dialog_shows_header_and_feedback() {
        plain();
        let mut dialog = CaptureDialog::default();
        dialog.click(Coordinate::new(10.123, 20.456), ClickWhileOpen::Retarget);
        let out = render_dialog(&dialog);
        assert!(out.starts_with("Add Note  10.123, 20.456"));
        assert!(out.contains("Note cannot be empty"));

        dialog.edit("ready").unwrap();
        let out = render_dialog(&dialog);
        assert!(out.contains("    ready\n"));
        assert!(!out.contains("Note cannot be empty"));
    }

    #[test]
    fn truncates_long_text() {
        let out = truncate_to_width("abcdefghij", 5);
        assert_eq!(out, "abcd…");
        assert_eq!(truncate_to_width("abc", 5), "abc");
    }

    #[test]
    fn config_lists_every_key() {
        let out = render_config(&RadarConfig::default());
        assert!(out.contains("zoom = 5\n"));
        assert!(out.contains("id-policy = positional\n"));
        assert!(out.contains("click-while-open = retarget\n"));
    }

    #[test]
    fn messages_are_one_per_line() {
        plain();
        let out = render_messages(&[CmdMessage::info("a"), CmdMessage::warning("b")]);
        assert_eq!(out, "a\nb\n");
    }
}
