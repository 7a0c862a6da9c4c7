use std::collections::HashSet;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info, warn};

use crate::models::{Course, MenuItem};

/// Slot name holding the JSON array of menu items.
pub const MENU_KEY: &str = "menuItems";

/// Dishes shown on first launch, or whenever the stored snapshot is unusable.
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: "1".to_string(),
            name: "Roasted Tomato Soup".to_string(),
            description: "Served with basil oil and cream.".to_string(),
            course: Course::Starters,
            price: 85.0,
            image: Some(
                "https://images.unsplash.com/photo-1600891964599-f61ba0e24092?auto=format&fit=crop&w=800&q=80"
                    .to_string(),
            ),
        },
        MenuItem {
            id: "2".to_string(),
            name: "Grilled Salmon".to_string(),
            description: "Fresh salmon with lemon butter sauce.".to_string(),
            course: Course::Mains,
            price: 180.0,
            image: Some(
                "https://images.unsplash.com/photo-1617196034796-73b435e3a2d7?auto=format&fit=crop&w=800&q=80"
                    .to_string(),
            ),
        },
    ]
}

/// Raw JSON stored under [`MENU_KEY`], or `None` when nothing was saved yet.
pub fn read_snapshot(conn: &Connection) -> Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM kv_store WHERE key = ?1",
        params![MENU_KEY],
        |row| row.get(0),
    )
    .optional()
    .context("failed to read menu snapshot")
}

/// Serialize `items` and overwrite the stored snapshot.
pub fn write_snapshot(conn: &Connection, items: &[MenuItem]) -> Result<()> {
    let json = serde_json::to_string(items).context("failed to serialize menu")?;
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![MENU_KEY, json],
    )
    .context("failed to write menu snapshot")?;
    Ok(())
}

/// Restore the menu at startup. Never fails: a missing, empty or unreadable
/// snapshot yields [`default_menu`]. The slot is only read here, never cleared.
pub fn load_menu(conn: &Connection) -> Vec<MenuItem> {
    let raw = match read_snapshot(conn) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("no saved menu, using defaults");
            return default_menu();
        }
        Err(err) => {
            warn!(error = %format!("{err:#}"), "could not read saved menu, using defaults");
            return default_menu();
        }
    };

    let items: Vec<MenuItem> = match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(err) => {
            warn!(error = %err, "saved menu is not valid JSON, using defaults");
            return default_menu();
        }
    };

    let items = retain_valid(items);
    if items.is_empty() {
        info!("saved menu is empty, using defaults");
        return default_menu();
    }

    debug!(count = items.len(), "restored saved menu");
    items
}

/// Best-effort save. Failures are logged and otherwise ignored; the in-memory
/// menu stays authoritative.
pub fn save_menu(conn: &Connection, items: &[MenuItem]) {
    match write_snapshot(conn, items) {
        Ok(()) => debug!(count = items.len(), "menu saved"),
        Err(err) => warn!(error = %format!("{err:#}"), "failed to save menu"),
    }
}

/// Drop records a hand-edited or corrupted snapshot may contain that the store
/// would never have produced.
fn retain_valid(items: Vec<MenuItem>) -> Vec<MenuItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| {
            let valid = item.price.is_finite()
                && item.price > 0.0
                && !item.name.trim().is_empty()
                && !item.description.trim().is_empty();
            if !valid {
                warn!(id = %item.id, "skipping invalid saved dish");
                return false;
            }
            if !seen.insert(item.id.clone()) {
                warn!(id = %item.id, "skipping duplicate saved dish");
                return false;
            }
            true
        })
        .collect()
}
