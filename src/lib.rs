//! Core library surface for the Chef Menu Manager TUI.
//!
//! The store and persistence layer are usable on their own; the `ui` module
//! wires them to a terminal front-end.
pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;

/// Persistence entry points used during startup.
pub use db::{load_menu, open_database, save_menu};

pub use models::{Course, CourseAverage, CourseFilter, MenuItem};
pub use store::{MenuItemDraft, MenuStore, ValidationError};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
