/*!
 * Common test utilities for the edlstrip test suite
 */

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use edlstrip::timecode::Timecode;

// Re-export the mock runners module
pub mod mock_runners;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample EDL file cutting the span from 1s to 2s
pub fn create_test_edl(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, "1 2 3\n")
}

/// Shorthand for building a timecode from seconds in test expectations
pub fn tc(seconds: f64) -> Timecode {
    Timecode::from_seconds(seconds).expect("valid test timecode")
}
