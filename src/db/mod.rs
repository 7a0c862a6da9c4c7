//! Persistence module split across logical submodules.

mod connection;
mod snapshot;

pub use connection::{ensure_schema, open_database};
pub use snapshot::{
    default_menu, load_menu, read_snapshot, save_menu, write_snapshot, MENU_KEY,
};
