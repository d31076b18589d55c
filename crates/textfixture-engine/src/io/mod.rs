use crate::format::{self, FixtureError};
use crate::models::Document;
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of fixture files.
pub const FIXTURE_EXTENSION: &str = "fixture";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid fixtures directory: {0}")]
    InvalidFixturesDir(String),
    #[error("{}: {source}", path.display())]
    Fixture {
        path: PathBuf,
        source: FixtureError,
    },
}

/// Read and parse a fixture file
pub fn read_fixture(
    relative_path: &RelativePath,
    fixtures_root: &Path,
) -> Result<Document, IoError> {
    read_fixture_at(&relative_path.to_path(fixtures_root))
}

/// Read and parse a fixture file by absolute or working-directory path
pub fn read_fixture_at(path: &Path) -> Result<Document, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(IoError::Io)?;
    format::parse(&bytes).map_err(|source| IoError::Fixture {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a document into a fixture file
pub fn write_fixture(
    relative_path: &RelativePath,
    fixtures_root: &Path,
    doc: &Document,
) -> Result<(), IoError> {
    write_fixture_at(&relative_path.to_path(fixtures_root), doc)
}

/// Serialize a document to a path, creating parent directories as needed
pub fn write_fixture_at(path: &Path, doc: &Document) -> Result<(), IoError> {
    // Serialize first so a rejected document leaves no file behind
    let bytes = format::serialize(doc).map_err(|source| IoError::Fixture {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, bytes).map_err(IoError::Io)
}

/// Scan for fixture files in a directory, recursively, sorted by path
pub fn scan_fixture_files(fixtures_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !fixtures_root.exists() {
        return Err(IoError::InvalidFixturesDir(
            "fixtures directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(fixtures_root, &mut files)?;
    files.sort();
    log::debug!(
        "found {} fixture files under {}",
        files.len(),
        fixtures_root.display()
    );
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        // Symlinked directories are not followed.
        if entry.file_type().map_err(IoError::Io)?.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == FIXTURE_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_fixtures_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidFixturesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
