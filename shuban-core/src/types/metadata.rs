//! Package metadata types (Dublin Core subset)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Package metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metadata {
    /// Unique package identifier, freshly generated per package
    pub identifier: Uuid,

    /// Package title
    pub title: String,

    /// Authors/creators
    pub creator: Vec<String>,

    /// Language tag (BCP 47)
    pub language: String,
}

impl Metadata {
    /// Create new metadata with a random identifier
    pub fn new(title: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            identifier: Uuid::new_v4(),
            title: title.into(),
            creator: Vec::new(),
            language: language.into(),
        }
    }

    /// Add an author/creator
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator.push(creator.into());
        self
    }
}

/// Page progression direction declared on the package spine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReadingDirection {
    /// Left to right (Latin, horizontal CJK)
    #[default]
    LeftToRight,

    /// Right to left (vertical CJK, Arabic, Hebrew)
    RightToLeft,
}

impl ReadingDirection {
    /// Value of the `page-progression-direction` attribute
    pub fn as_attribute(&self) -> &'static str {
        match self {
            ReadingDirection::LeftToRight => "ltr",
            ReadingDirection::RightToLeft => "rtl",
        }
    }
}
