use std::path::PathBuf;

use tempfile::TempDir;

/// Helper function to create a temporary directory and store path
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let store_path = temp_dir.path().join("test_state.db");
    (temp_dir, store_path)
}
