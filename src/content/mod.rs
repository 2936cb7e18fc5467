//! Content module - CMS post records and structured text documents

pub mod document;
pub mod loader;
mod post;

pub use document::{Block, ContentDocument, ContentError, InlineSpan, Mark, StructuredText};
pub use loader::{ContentSource, FileSource};
pub use post::{
    parse_date, Author, CoverImage, MetaTag, Picture, Post, PostQuery, ResponsiveImage, Video,
};
