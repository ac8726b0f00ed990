/// Test utilities module for automatic cleanup and consistent test infrastructure
///
/// This module provides RAII-based cleanup that guarantees test data is removed
/// even if tests panic or fail.
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use super::connection::CsvConnection;

/// RAII Test Environment that automatically cleans up on drop
pub struct TestEnvironment {
    /// The temporary directory - kept alive to prevent auto-cleanup until drop
    _temp_dir: TempDir,
    /// The CSV connection for the test
    pub connection: CsvConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = CsvConnection::new(&base_path);

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    /// Write the schedule worksheet export
    pub fn write_schedule(&self, contents: &str) -> Result<()> {
        fs::write(self.connection.schedule_file_path(), contents)?;
        Ok(())
    }

    /// Write the trade worksheet export
    pub fn write_trades(&self, contents: &str) -> Result<()> {
        fs::write(self.connection.trades_file_path(), contents)?;
        Ok(())
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        if std::env::var("IPO_DASHBOARD_DEBUG_TESTS").is_ok() {
            println!("Cleaning up test environment: {:?}", self.base_path);
        }
    }
}
