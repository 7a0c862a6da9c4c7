//! On-disk locations used by the app. Everything lives under one folder in the
//! user's home directory so a single `rm -r` resets the app.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".chef-menu-manager";
/// SQLite file holding the key-value slot with the menu snapshot.
const DB_FILE_NAME: &str = "menu.sqlite";
/// Subfolder for rolling log files.
const LOG_DIR_NAME: &str = "logs";

/// Resolved paths for the database and log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
}

impl AppPaths {
    /// Default layout inside the current user's home directory.
    pub fn resolve() -> Result<Self> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        Ok(Self::at(base_dirs.home_dir().join(DATA_DIR_NAME)))
    }

    /// Same layout rooted at an arbitrary directory.
    pub fn at(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        Self {
            db_path: data_dir.join(DB_FILE_NAME),
            log_dir: data_dir.join(LOG_DIR_NAME),
            data_dir,
        }
    }

    /// Create the data and log folders if they are missing.
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir).with_context(|| {
            format!("failed to create data directory {}", self.data_dir.display())
        })?;
        fs::create_dir_all(&self.log_dir).with_context(|| {
            format!("failed to create log directory {}", self.log_dir.display())
        })?;
        Ok(())
    }
}
