//! # CLI Layer
//!
//! This module is **one possible UI client** for radar. A map widget in a
//! graphical shell would drive the same [`RadarApi`] calls.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument parsing
//! - Decides where the data directory lives
//! - Starts the logger
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::render::{print_messages, render_config, render_map, render_markers, render_note_list};
use super::session::run_session;
use super::setup::{Cli, Commands, CoreCommands, MapCommands, MiscCommands};
use clap::Parser;
use directories::ProjectDirs;
use log::{debug, warn};
use radar::api::{ConfigAction, RadarApi};
use radar::commands::RadarPaths;
use radar::config::RadarConfig;
use radar::error::{RadarError, Result};
use radar::logging::init_logging;
use radar::model::Coordinate;
use radar::store::fs::FileStore;
use std::path::PathBuf;

/// Overrides the data directory; used by tests and portable setups.
const HOME_ENV: &str = "RADAR_HOME";

struct AppContext {
    api: RadarApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Add { lat, lng, text } => handle_add(&mut ctx, lat, lng, text),
            CoreCommands::List => handle_list(&ctx),
            CoreCommands::Delete { id } => handle_delete(&mut ctx, id),
        },
        Some(Commands::Map(cmd)) => match cmd {
            MapCommands::Click { x, y, text } => handle_click(&mut ctx, x, y, text),
            MapCommands::Markers => handle_markers(&ctx),
            MapCommands::Session => handle_session(&mut ctx),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
        },
        None => handle_list(&ctx),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "radar", "radar")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RadarError::Api("Could not determine data directory".into()))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    debug!(
        "event=context_init module=cli status=start data_dir={}",
        data_dir.display()
    );

    let config = RadarConfig::load(&data_dir).unwrap_or_else(|err| {
        warn!(
            "event=config_load module=cli status=error error={} fallback=defaults",
            err
        );
        RadarConfig::default()
    });

    let store = FileStore::new(data_dir.clone());
    let paths = RadarPaths { data_dir };
    let api = RadarApi::new(store, config, paths);

    Ok(AppContext { api })
}

fn handle_add(ctx: &mut AppContext, lat: f64, lng: f64, text: Vec<String>) -> Result<()> {
    let result = ctx
        .api
        .place_note(Coordinate::new(lat, lng), &text.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_click(ctx: &mut AppContext, x: f64, y: f64, text: Vec<String>) -> Result<()> {
    let result = ctx.api.place_note_at_pixel(x, y, &text.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_notes();
    print!("{}", render_note_list(&result.listed_notes));
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u32) -> Result<()> {
    let result = ctx.api.delete_note(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_markers(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.markers();
    print!("{}", render_map(ctx.api.map()));
    print!("{}", render_markers(&result.markers));
    print_messages(&result.messages);
    Ok(())
}

fn handle_session(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    run_session(&mut ctx.api, stdin.lock())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.configure(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}
