//! Configuration module

mod site;

pub use site::HeaderConfig;
pub use site::HighlightConfig;
pub use site::RenderConfig;
pub use site::SiteConfig;
