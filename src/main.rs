//! Binary entry point: resolve the data folder, start file logging, restore
//! the saved menu and drive the Ratatui event loop until the user exits.
use chef_menu_manager::config::AppPaths;
use chef_menu_manager::logging::init_logging;
use chef_menu_manager::{load_menu, open_database, run_app, App, MenuStore};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let paths = AppPaths::resolve()?;
    paths.ensure_dirs()?;
    let _log_guard = init_logging(&paths.log_dir)?;
    info!(data_dir = %paths.data_dir.display(), "starting chef menu manager");

    let conn = open_database(&paths.db_path)?;
    let store = MenuStore::from_items(load_menu(&conn));
    info!(dishes = store.len(), "menu loaded");

    let mut app = App::new(conn, store);
    let result = run_app(&mut app);
    info!("shutting down");
    result
}
