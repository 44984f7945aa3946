//! # JSON Connection
//!
//! Manages the data directory that holds the persisted session slot.

use anyhow::Result;
use directories::ProjectDirs;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the single persisted slot inside the data directory.
const SESSIONS_FILE: &str = "sessions.json";

/// JsonConnection resolves file paths inside the app's data directory and
/// makes sure the directory exists.
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a connection rooted at `base_directory`, creating it if needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Platform data directory for the app, with a temp-dir fallback when
    /// the platform directories cannot be resolved.
    pub fn default_data_dir() -> PathBuf {
        match ProjectDirs::from("com", "blazingpaddles", "BlazingPaddles") {
            Some(dirs) => {
                let dir = dirs.data_dir().to_path_buf();
                info!("Using data directory: {}", dir.display());
                dir
            }
            None => {
                let dir = std::env::temp_dir().join("blazing_paddles");
                info!(
                    "No platform data directory available, falling back to: {}",
                    dir.display()
                );
                dir
            }
        }
    }

    /// Path of the persisted session slot.
    pub fn sessions_file_path(&self) -> PathBuf {
        self.base_directory.join(SESSIONS_FILE)
    }
}
