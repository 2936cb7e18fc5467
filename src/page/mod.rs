//! Page components - header and post detail page

pub mod header;
mod post;

pub use header::{Header, HeaderState};
pub use post::{PageRenderer, CODE_CSS_PATH, INDEX_CSS_PATH};
