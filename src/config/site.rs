//! Site configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub language: String,
    pub about_url: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    // Post page
    pub more_posts: usize,
    pub date_format: String,

    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
    #[serde(default)]
    pub header: HeaderConfig,

    /// Token colour overrides, merged over the default palette
    #[serde(default)]
    pub code_style: IndexMap<String, String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "CodewCaro.".to_string(),
            language: "en".to_string(),
            about_url: "https://www.carolinecah.com".to_string(),

            url: "http://localhost:4000".to_string(),
            root: "/".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),

            more_posts: 2,
            date_format: "%B %-d, %Y".to_string(),

            render: RenderConfig::default(),
            highlight: HighlightConfig::default(),
            header: HeaderConfig::default(),
            code_style: IndexMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded configuration from {:?}", path.as_ref());
        Ok(config)
    }
}

/// Document rendering options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub separator_before_images: bool,
    pub default_language: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            separator_before_images: false,
            default_language: "javascript".to_string(),
        }
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub line_numbers: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            line_numbers: true,
        }
    }
}

/// Page header configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Vertical scroll offset (px) past which the header switches to its scrolled style
    pub scroll_threshold: u32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "CodewCaro.");
        assert_eq!(config.more_posts, 2);
        assert!(!config.render.separator_before_images);
        assert_eq!(config.render.default_language, "javascript");
        assert_eq!(config.header.scroll_threshold, 50);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r##"
title: My Blog
more_posts: 4
render:
  separator_before_images: true
highlight:
  line_numbers: false
code_style:
  keyword: "#ff00ff"
"##;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.more_posts, 4);
        assert!(config.render.separator_before_images);
        assert_eq!(config.render.default_language, "javascript");
        assert!(config.highlight.enable);
        assert!(!config.highlight.line_numbers);
        assert_eq!(config.code_style.get("keyword").unwrap(), "#ff00ff");
        assert_eq!(config.public_dir, "public");
    }
}
