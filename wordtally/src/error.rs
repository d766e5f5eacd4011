// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort an analysis run. None of them leave a partial report.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("No input files were supplied")]
    EmptyInput,

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Unknown language: {name}")]
    UnknownLanguage { name: String },

    #[error("Error reading the file '{}': {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid TOML in '{}': {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid YAML in '{}': {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("Unsupported config format '{}' (expected .toml, .yaml or .yml)", path.display())]
    UnsupportedFormat { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
