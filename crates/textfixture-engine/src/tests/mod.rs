use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary fixtures directory
pub fn create_test_fixtures_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content
pub fn create_test_file(fixtures_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = fixtures_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
