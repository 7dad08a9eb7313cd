//! Error types for Shuban Core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ShubanError
pub type Result<T> = std::result::Result<T, ShubanError>;

/// Top-level error type for all Shuban operations
#[derive(Debug, Error)]
pub enum ShubanError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Packaging error: {0}")]
    Packaging(#[from] PackagingError),

    #[error("Inspection error: {0}")]
    Inspect(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while assembling or serializing a package
#[derive(Debug, Error)]
pub enum PackagingError {
    #[error("Packaging library failed: {0}")]
    Library(String),

    #[error("Invalid reading order: {0}")]
    InvalidReadingOrder(String),

    #[error("Missing metadata: {0}")]
    MissingMetadata(String),
}

/// Errors that occur while reading a package back
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid EPUB: {0}")]
    InvalidEpub(String),

    #[error("Invalid HTML: {0}")]
    InvalidHtml(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Errors that occur while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}
