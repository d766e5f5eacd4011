// src/core/stop_words/loader.rs
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::models::Config;

/// Config file names looked for in each directory, in order of preference.
pub const CONFIG_FILE_NAMES: &[&str] = &[".wordtally.toml", ".wordtally.yaml", ".wordtally.yml"];

/// Finds the nearest config file, starting at `dir` and walking up through its
/// parents. Stops at the first directory that holds one.
///
/// # Arguments
///
/// * `dir` - The starting directory to search for config files
///
/// # Returns
///
/// * `Some(path)` of the first config file found, or `None` if no ancestor has one
#[inline]
#[must_use]
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        for name in CONFIG_FILE_NAMES {
            let candidate = current_dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Reads a config file, picking the parser from its extension.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The extension is not `.toml`, `.yaml` or `.yml`
/// * The contents do not parse as the expected format
#[inline]
pub fn read_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        }),
        Some("yaml" | "yml") => {
            // An empty YAML document deserializes to unit, not to an empty map.
            if content.trim().is_empty() {
                return Ok(Config::default());
            }
            serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Loads the nearest config file above `dir`, or the default config if there is none.
///
/// # Arguments
///
/// * `dir` - The starting directory to search for config files
///
/// # Returns
///
/// * `Ok(Config)` holding the parsed file, or the empty default
///
/// # Errors
///
/// Fails if a config file is found but cannot be read or parsed.
#[inline]
pub fn load_config(dir: &Path) -> Result<Config, ConfigError> {
    match find_config_file(dir) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            read_config_file(&path)
        }
        None => {
            tracing::debug!(dir = %dir.display(), "no config file found");
            Ok(Config::default())
        }
    }
}
