//! # Radar Architecture
//!
//! Radar pins short text notes to map coordinates. Click the map, type a note,
//! and it shows up as a marker on the map and as an entry in the note list.
//! Notes survive restarts through a local key-value store.
//!
//! Radar is a **UI-agnostic library** with a terminal client on top. Map tiles,
//! boundary shapes and icon images belong to whichever front end hosts it; the
//! library only needs clicks in and markers out.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders lists/markers/dialog           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - RadarApi: owns notes, capture dialog and map view        │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user intent                               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain + Storage (notes, dialog, map/, store/)             │
//! │  - NoteStore over a KeyValueStore                           │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Note Lifecycle
//!
//! 1. A click on the map becomes a [`model::Coordinate`]
//!    ([`map::MapView::coordinate_at`]) and opens the [`dialog::CaptureDialog`].
//! 2. Confirming the dialog calls [`notes::NoteStore::add`]; blank text is
//!    rejected and the dialog stays open.
//! 3. Every change writes the whole collection under one key.
//! 4. The list and the marker layer are re-derived from the new collection.
//!
//! All of this runs on a single thread, one user event at a time.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and session controller
//! - [`commands`]: Logic for each user intent
//! - [`notes`]: The note collection and its id rules
//! - [`dialog`]: Capture dialog state machine
//! - [`map`]: Map view, projection and marker layer
//! - [`store`]: Key-value storage and the persistence adapter
//! - [`model`]: Core data types (`Note`, `Coordinate`)
//! - [`config`]: Configuration management
//! - [`logging`]: Logger bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod dialog;
pub mod error;
pub mod logging;
pub mod map;
pub mod model;
pub mod notes;
pub mod store;
