//! Conversion settings, loadable from a TOML file

use crate::error::ConfigError;
use crate::script::Profile;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Language tag written into every package and content document
pub const DEFAULT_LANGUAGE: &str = "zh-TW";

/// Author recorded for every package ("public domain")
pub const DEFAULT_AUTHOR: &str = "公版";

/// Text embedded when a source document is empty or whitespace-only
pub const DEFAULT_PLACEHOLDER: &str = "本文檔內容為空。";

/// Label of the single table-of-contents entry
pub const DEFAULT_TOC_LABEL: &str = "Chapter 1";

/// Settings shared by every conversion in a run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Script conversion profile
    pub profile: Profile,

    /// Package and content language tag
    pub language: String,

    /// Author metadata value
    pub author: String,

    /// Replacement text for blank sources
    pub placeholder: String,

    /// Table-of-contents label for the content document
    pub toc_label: String,

    /// Extension (without the dot) of eligible source files
    pub source_extension: String,

    /// File name prefix that marks resource-fork shadow files
    pub hidden_prefix: String,

    /// Order in which discovered files are processed
    pub order: TraversalOrder,

    /// How output files are replaced
    pub write_mode: WriteMode,

    /// Record failures and continue instead of halting the run
    pub keep_going: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            language: DEFAULT_LANGUAGE.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            toc_label: DEFAULT_TOC_LABEL.to_string(),
            source_extension: "txt".to_string(),
            hidden_prefix: "._".to_string(),
            order: TraversalOrder::default(),
            write_mode: WriteMode::default(),
            keep_going: false,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse settings from TOML text
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

/// Processing order of discovered source files
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// Sorted by full path
    #[default]
    Lexicographic,

    /// Whatever the directory enumeration yields
    Filesystem,
}

impl FromStr for TraversalOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lexicographic" | "sorted" => Ok(TraversalOrder::Lexicographic),
            "filesystem" | "fs" => Ok(TraversalOrder::Filesystem),
            _ => Err(ConfigError::InvalidValue {
                field: "order",
                value: s.to_string(),
            }),
        }
    }
}

/// Output replacement strategy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Delete any existing output, then write the new one in place
    #[default]
    Replace,

    /// Write to a temporary sibling, then rename it over the output
    Atomic,
}
