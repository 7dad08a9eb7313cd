//! Shuban Core Library
//!
//! Converts plain-text documents into EPUB packages laid out for vertical,
//! right-to-left reading in traditional Chinese script. The pipeline runs
//! one way: script conversion, markup construction, package assembly and
//! serialization. The batch driver applies it to a directory tree.

pub mod batch;
pub mod config;
pub mod encoder;
pub mod error;
pub mod inspect;
pub mod markup;
pub mod script;
pub mod types;

pub use config::{Settings, TraversalOrder, WriteMode};
pub use error::{ConfigError, PackagingError, ParseError, Result, ShubanError};
pub use script::{Profile, ScriptConverter};
pub use types::{
    ContentItem, Metadata, Package, ReadingDirection, SpineItem, StyleResource, TocEntry,
};
