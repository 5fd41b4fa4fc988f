//! Zoom control for a flashcard-review window.
//!
//! The library side of deckzoom: zoom arithmetic and per-screen persistence
//! ([`controller`]), the screen-state model ([`state`]), the persisted
//! settings blob and its JSON store ([`settings`], [`store`]), a wheel-event
//! decorator for Ctrl+scroll zooming ([`wheel`]), and a declarative menu-bar
//! model ([`menu`]). The `deckzoom` binary wires all of this into an egui
//! review window.

pub mod controller;
pub mod menu;
pub mod settings;
pub mod state;
pub mod store;
pub mod wheel;

pub use controller::{ContentView, DEFAULT_ZOOM_STEP, ZoomController};
pub use menu::{Menu, MenuBar, MenuEntry, MenuItem, ZoomCommand, install_zoom_menu};
pub use settings::ZoomSettings;
pub use state::{ScreenState, ZoomCategory};
pub use store::{ConfigError, ConfigStore, JsonConfigStore};
pub use wheel::{WheelEvent, WheelHandler, ZoomDirection, ZoomWheel};
