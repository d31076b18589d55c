use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use textfixture_config::Config;
use textfixture_engine::io;

/// Expand command-line paths into fixture files, falling back to the config.
///
/// Directories are scanned recursively for `.fixture` files; files are taken
/// as given whatever their extension.
pub fn resolve(paths: &[PathBuf], config_path: Option<&Path>) -> Result<Vec<PathBuf>> {
    if paths.is_empty() {
        return from_config(config_path);
    }

    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(
                io::scan_fixture_files(path)
                    .with_context(|| format!("scanning {}", path.display()))?,
            );
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn from_config(config_path: Option<&Path>) -> Result<Vec<PathBuf>> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::config_path);
    log::debug!("Config path: {}", config_path.display());

    let Some(config) = Config::load_from_path(&config_path)? else {
        bail!(
            "no paths given and no config file found at {}",
            config_path.display()
        );
    };

    io::validate_fixtures_dir(&config.fixtures_path).with_context(|| {
        format!(
            "fixtures path '{}' from config file '{}' is invalid",
            config.fixtures_path.display(),
            config_path.display()
        )
    })?;

    let files = config.fixture_files()?;
    log::info!(
        "{} fixture files under {}",
        files.len(),
        config.fixtures_path.display()
    );
    Ok(files)
}
