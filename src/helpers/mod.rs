//! Helper functions for page templates
//!
//! Small HTML, URL and date builders shared by the page components.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
