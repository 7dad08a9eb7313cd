//! Package description types

mod metadata;
mod package;
mod resource;
mod toc;

pub use metadata::{Metadata, ReadingDirection};
pub use package::Package;
pub use resource::{ContentItem, StyleResource, CONTENT_HREF, STYLE_CSS, STYLE_HREF};
pub use toc::{SpineItem, TocEntry};
