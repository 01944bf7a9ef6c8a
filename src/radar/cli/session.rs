//! Interactive session: one line per user event, driving the same
//! [`RadarApi`] a graphical front end would.
//!
//! Errors inside a session are reported and the session continues; a
//! rejected note keeps its dialog open.

use super::render::{print_messages, render_dialog, render_map, render_markers, render_note_list};
use radar::api::RadarApi;
use radar::error::{RadarError, Result};
use radar::model::Coordinate;
use radar::store::KeyValueStore;
use std::io::{BufRead, IsTerminal, Write};
use std::str::FromStr;

const SESSION_HELP: &str = "\
Commands:
  click <x> <y>      click the map at a viewport pixel
  at <lat> <lng>     click the map at a coordinate
  type <text>        set the note text
  add                add the note
  cancel             close the note dialog
  delete <id>        delete a note
  list               show notes
  markers            show markers in view
  zoom in|out|<n>    change zoom
  pan <dx> <dy>      move the map by pixels
  map                show the map view
  help               show this help
  quit               leave the session
";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Click { x: f64, y: f64 },
    At(Coordinate),
    Type(String),
    Add,
    Cancel,
    Delete(u32),
    List,
    Markers,
    ZoomIn,
    ZoomOut,
    Zoom(u8),
    Pan { dx: f64, dy: f64 },
    Map,
    Help,
    Quit,
}

fn parse_number<T: FromStr>(word: Option<&str>, what: &str) -> Result<T> {
    let word = word.ok_or_else(|| RadarError::Api(format!("Missing {}", what)))?;
    word.parse()
        .map_err(|_| RadarError::Api(format!("Invalid {}: {}", what, word)))
}

/// Like [`parse_number`], but NaN and infinities are rejected.
fn parse_finite(word: Option<&str>, what: &str) -> Result<f64> {
    let value: f64 = parse_number(word, what)?;
    if !value.is_finite() {
        return Err(RadarError::Api(format!("Invalid {}: {}", what, value)));
    }
    Ok(value)
}

impl FromStr for SessionCommand {
    type Err = RadarError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let mut args = rest.split_whitespace();

        let command = match head {
            "click" => SessionCommand::Click {
                x: parse_finite(args.next(), "x")?,
                y: parse_finite(args.next(), "y")?,
            },
            "at" => SessionCommand::At(Coordinate::new(
                parse_finite(args.next(), "latitude")?,
                parse_finite(args.next(), "longitude")?,
            )),
            "type" | "text" => SessionCommand::Type(rest.to_string()),
            "add" | "confirm" => SessionCommand::Add,
            "cancel" => SessionCommand::Cancel,
            "delete" | "rm" => SessionCommand::Delete(parse_number(args.next(), "id")?),
            "list" | "ls" => SessionCommand::List,
            "markers" => SessionCommand::Markers,
            "zoom" => match args.next() {
                Some("in") | Some("+") => SessionCommand::ZoomIn,
                Some("out") | Some("-") => SessionCommand::ZoomOut,
                other => SessionCommand::Zoom(parse_number(other, "zoom level")?),
            },
            "pan" => SessionCommand::Pan {
                dx: parse_finite(args.next(), "dx")?,
                dy: parse_finite(args.next(), "dy")?,
            },
            "map" => SessionCommand::Map,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            other => return Err(RadarError::Api(format!("Unknown command: {}", other))),
        };
        Ok(command)
    }
}

/// Runs a session until `quit` or end of input.
pub fn run_session<S: KeyValueStore, R: BufRead>(api: &mut RadarApi<S>, input: R) -> Result<()> {
    let interactive = std::io::stdin().is_terminal();
    if interactive {
        println!("Type `help` for commands.");
    }
    print!("{}", render_map(api.map()));
    show_list(api);

    let mut lines = input.lines();
    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush().map_err(RadarError::Io)?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(RadarError::Io)?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{}", err);
                continue;
            }
        };
        if command == SessionCommand::Quit {
            break;
        }
        if let Err(err) = apply(api, command) {
            eprintln!("{}", err);
            // A rejected note keeps the dialog open; show it again
            print!("{}", render_dialog(api.dialog()));
        }
    }
    Ok(())
}

fn apply<S: KeyValueStore>(api: &mut RadarApi<S>, command: SessionCommand) -> Result<()> {
    match command {
        SessionCommand::Click { x, y } => {
            let result = api.click_map(x, y)?;
            print_messages(&result.messages);
            print!("{}", render_dialog(api.dialog()));
        }
        SessionCommand::At(at) => {
            let result = api.click_at(at)?;
            print_messages(&result.messages);
            print!("{}", render_dialog(api.dialog()));
        }
        SessionCommand::Type(text) => {
            api.edit_draft(&text)?;
            print!("{}", render_dialog(api.dialog()));
        }
        SessionCommand::Add => {
            let result = api.confirm_note()?;
            print_messages(&result.messages);
            show_list(api);
        }
        SessionCommand::Cancel => {
            let result = api.cancel_note();
            print_messages(&result.messages);
        }
        SessionCommand::Delete(id) => {
            let result = api.delete_note(id)?;
            print_messages(&result.messages);
            show_list(api);
        }
        SessionCommand::List => show_list(api),
        SessionCommand::Markers => {
            let result = api.markers();
            print!("{}", render_markers(&result.markers));
            print_messages(&result.messages);
        }
        SessionCommand::ZoomIn => {
            api.zoom_in();
            print!("{}", render_map(api.map()));
        }
        SessionCommand::ZoomOut => {
            api.zoom_out();
            print!("{}", render_map(api.map()));
        }
        SessionCommand::Zoom(level) => {
            api.set_zoom(level);
            print!("{}", render_map(api.map()));
        }
        SessionCommand::Pan { dx, dy } => {
            api.pan_by(dx, dy)?;
            print!("{}", render_map(api.map()));
        }
        SessionCommand::Map => print!("{}", render_map(api.map())),
        SessionCommand::Help => print!("{}", SESSION_HELP),
        SessionCommand::Quit => {}
    }
    Ok(())
}

fn show_list<S: KeyValueStore>(api: &RadarApi<S>) {
    let result = api.list_notes();
    print!("{}", render_note_list(&result.listed_notes));
    print_messages(&result.messages);
}
