/// Test utilities for storage tests.
///
/// Provides an RAII test environment whose temporary directory is removed
/// when the environment is dropped, even if the test panics.
use anyhow::Result;
use tempfile::TempDir;

use super::connection::JsonConnection;

/// Test environment with a temporary data directory and a connection into it.
pub struct TestEnvironment {
    pub connection: JsonConnection,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = JsonConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            _temp_dir: temp_dir,
        })
    }
}
