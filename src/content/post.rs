//! Post records as returned by the CMS

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use super::document::{ContentDocument, ContentError, StructuredText};

/// A blog post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    /// Post title
    pub title: String,

    /// URL-friendly name
    pub slug: String,

    /// Publication date as delivered by the CMS (`YYYY-MM-DD` or RFC 3339)
    pub date: String,

    /// Short summary used in post listings
    pub excerpt: Option<String>,

    /// SEO meta tags (`_seoMetaTags`)
    pub seo: Vec<MetaTag>,

    /// Embedded video
    pub youtube: Option<Video>,

    /// Structured text body
    pub content: Option<StructuredText>,

    /// Cover image
    pub cover_image: Option<CoverImage>,

    /// Cover image URL used for social previews
    pub og_image: Option<Picture>,

    /// Post author
    pub author: Option<Author>,
}

impl Post {
    /// Resolve the structured text body; a post without content yields an empty document
    pub fn document(&self) -> Result<ContentDocument, ContentError> {
        match &self.content {
            Some(text) => ContentDocument::from_structured_text(text),
            None => Ok(ContentDocument::default()),
        }
    }

    /// Parsed publication date, used for ordering
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_date(&self.date)
    }
}

/// Parse a CMS date field: either a full RFC 3339 timestamp or a bare date
pub fn parse_date(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().fixed_offset())
}

/// Post author
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub picture: Option<Picture>,
}

/// An image referenced by URL only
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Picture {
    pub url: String,
}

/// `coverImage { responsiveImage { ... } }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoverImage {
    pub responsive_image: Option<ResponsiveImage>,
}

/// Responsive image data (`responsiveImageFragment`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponsiveImage {
    pub src: String,
    pub src_set: Option<String>,
    pub webp_src_set: Option<String>,
    pub sizes: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub aspect_ratio: Option<f64>,
    pub alt: Option<String>,
    pub title: Option<String>,
    pub base64: Option<String>,
    pub bg_color: Option<String>,
}

/// Embedded video (`youtube { ... }`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Video {
    pub provider: String,
    pub provider_uid: String,
    pub title: Option<String>,
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Video {
    /// Embeddable player URL
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.provider_uid)
    }
}

/// A single SEO tag (`metaTagsFragment`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaTag {
    pub tag: String,
    pub attributes: Option<serde_json::Map<String, serde_json::Value>>,
    pub content: Option<String>,
}

/// Response of the `PostBySlug` query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostQuery {
    pub post: Option<Post>,
    pub more_posts: Vec<Post>,
}

impl PostQuery {
    /// Parse a query response, accepting the `{"data": ...}` envelope or a bare post record
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let mut value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(data) = value.get_mut("data").map(serde_json::Value::take) {
            value = data;
        }

        if value.get("post").is_some() || value.get("morePosts").is_some() {
            Ok(serde_json::from_value(value)?)
        } else {
            Ok(Self {
                post: Some(serde_json::from_value(value)?),
                more_posts: Vec::new(),
            })
        }
    }
}
