//! Render module - structured text to display nodes and HTML

mod document;
mod highlight;
mod html;
pub mod node;
mod style;

pub use document::{DocumentRenderer, RenderOptions};
pub use highlight::CodeHighlighter;
pub use html::to_html;
pub use node::{DisplayNode, NodeContent, NodeKind};
pub use style::StyleMap;
