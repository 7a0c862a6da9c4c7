//! Ratatui front-end: a welcome splash, the home menu with per-course
//! averages, a read-only course filter, the add-dish form and the delete
//! confirmation dialog.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
