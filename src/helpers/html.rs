//! HTML helper functions

use super::url::url_for;
use crate::config::SiteConfig;
use crate::content::{MetaTag, ResponsiveImage};

/// Generate a CSS link tag
///
/// # Examples
/// ```ignore
/// css(&config, "styles/index.css") // -> <link rel="stylesheet" href="/styles/index.css">
/// ```
pub fn css(config: &SiteConfig, path: &str) -> String {
    format!(r#"<link rel="stylesheet" href="{}">"#, asset_url(config, path))
}

/// Generate an anchor tag wrapping already-rendered HTML
///
/// # Examples
/// ```ignore
/// link_to(&config, "/posts/hello/", "<p>Hello</p>", Some("grid__link"))
/// ```
pub fn link_to(config: &SiteConfig, path: &str, inner_html: &str, class: Option<&str>) -> String {
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, html_escape(c)))
        .unwrap_or_default();

    format!(
        r#"<a href="{}"{}>{}</a>"#,
        html_escape(&asset_url(config, path)),
        class_attr,
        inner_html
    )
}

/// Generate an image tag
pub fn image_tag(src: &str, alt: Option<&str>, class: Option<&str>) -> String {
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, html_escape(c)))
        .unwrap_or_default();

    format!(
        r#"<img src="{}" alt="{}"{}>"#,
        html_escape(src),
        html_escape(alt.unwrap_or("")),
        class_attr
    )
}

/// Generate a responsive image: blurred placeholder background plus srcset image
pub fn responsive_image(image: &ResponsiveImage, class: Option<&str>) -> String {
    let mut attrs = vec![
        format!(r#"src="{}""#, html_escape(&image.src)),
        format!(
            r#"alt="{}""#,
            html_escape(image.alt.as_deref().unwrap_or(""))
        ),
    ];
    if let Some(src_set) = &image.src_set {
        attrs.push(format!(r#"srcset="{}""#, html_escape(src_set)));
    }
    if let Some(sizes) = &image.sizes {
        attrs.push(format!(r#"sizes="{}""#, html_escape(sizes)));
    }
    if let Some(width) = image.width {
        attrs.push(format!(r#"width="{}""#, width));
    }
    if let Some(height) = image.height {
        attrs.push(format!(r#"height="{}""#, height));
    }
    if let Some(title) = &image.title {
        attrs.push(format!(r#"title="{}""#, html_escape(title)));
    }
    attrs.push(r#"loading="lazy""#.to_string());

    let mut style = String::from("position: relative; overflow: hidden;");
    if let Some(base64) = &image.base64 {
        style.push_str(&format!(
            " background-image: url({}); background-size: cover;",
            html_escape(base64)
        ));
    } else if let Some(bg) = &image.bg_color {
        style.push_str(&format!(" background-color: {};", html_escape(bg)));
    }

    let class_attr = class
        .map(|c| format!(r#" class="{}""#, html_escape(c)))
        .unwrap_or_default();

    format!(
        r#"<div{} style="{}"><img {} style="width: 100%; height: auto; display: block;"></div>"#,
        class_attr,
        style,
        attrs.join(" ")
    )
}

/// Render a CMS meta tag (`<title>`, `<meta>` or `<link>`)
pub fn meta_tag(tag: &MetaTag) -> Option<String> {
    let attrs = tag
        .attributes
        .iter()
        .flatten()
        .filter_map(|(key, value)| {
            let value = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Null => return None,
                other => other.to_string(),
            };
            Some(format!(r#" {}="{}""#, html_escape(key), html_escape(&value)))
        })
        .collect::<String>();

    match tag.tag.as_str() {
        "title" => Some(format!(
            "<title>{}</title>",
            html_escape(tag.content.as_deref().unwrap_or(""))
        )),
        "meta" | "link" => Some(format!("<{}{}>", tag.tag, attrs)),
        other => {
            tracing::debug!("Ignoring unsupported meta tag <{}>", other);
            None
        }
    }
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn asset_url(config: &SiteConfig, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
        path.to_string()
    } else {
        url_for(config, path)
    }
}
