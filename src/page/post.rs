//! Post detail page

use anyhow::{Context, Result};

use super::header::Header;
use crate::config::SiteConfig;
use crate::content::{Author, MetaTag, Post, Video};
use crate::helpers::{
    css, full_url_for, html_escape, image_tag, link_to, meta_tag, post_path, responsive_image,
    time_tag,
};
use crate::render::{to_html, CodeHighlighter, DocumentRenderer, RenderOptions, StyleMap};

/// Stylesheet generated from the code colour table
pub const CODE_CSS_PATH: &str = "styles/code.css";

/// Site-wide stylesheet
pub const INDEX_CSS_PATH: &str = "styles/index.css";

/// Layout, header and navigation styles
const INDEX_CSS: &str = include_str!("index.css");

/// Renders complete post pages
pub struct PageRenderer {
    config: SiteConfig,
    renderer: DocumentRenderer,
    highlighter: Option<CodeHighlighter>,
    styles: StyleMap,
}

impl PageRenderer {
    /// Create a page renderer from the site configuration
    pub fn new(config: &SiteConfig) -> Self {
        let highlighter = config
            .highlight
            .enable
            .then(|| CodeHighlighter::new(config.highlight.line_numbers));

        Self {
            config: config.clone(),
            renderer: DocumentRenderer::with_options(RenderOptions::from(&config.render)),
            highlighter,
            styles: StyleMap::with_overrides(&config.code_style),
        }
    }

    /// Stylesheet for code blocks
    pub fn code_css(&self) -> String {
        self.styles.to_css()
    }

    /// Site-wide stylesheet, including the scrolled header state
    pub fn index_css(&self) -> &'static str {
        INDEX_CSS
    }

    /// Render the post body to an HTML fragment
    pub fn render_content(&self, post: &Post) -> Result<String> {
        let document = post
            .document()
            .with_context(|| format!("invalid content in post `{}`", post.slug))?;

        let mut nodes = self.renderer.render(&document);
        tracing::debug!(
            "Rendered {} blocks of `{}` into {} nodes",
            document.len(),
            post.slug,
            nodes.len()
        );

        // Highlighting runs once, over the finished node sequence
        if let Some(highlighter) = &self.highlighter {
            let count = highlighter.highlight_all(&mut nodes);
            tracing::trace!("Highlighted {} code blocks in `{}`", count, post.slug);
        }

        Ok(to_html(&nodes))
    }

    /// Render a full post page, followed by the "more posts" listing
    pub fn render_post(&self, post: &Post, more_posts: &[Post]) -> Result<String> {
        let content = self.render_content(post)?;
        let header = Header::new(&self.config);

        let mut body = String::new();
        body.push_str(&header.render());
        body.push_str(r#"<div class="container">"#);

        body.push_str(&format!(
            r#"<section class="section">{}</section>"#,
            link_to(
                &self.config,
                "/",
                &format!(
                    r#"<p class="section__title">{}</p>"#,
                    html_escape(&self.config.title)
                ),
                Some("grid__link"),
            )
        ));
        body.push_str(&format!(
            r#"<section class="section"><h1 class="title">{}</h1></section>"#,
            html_escape(&post.title)
        ));
        if let Some(author) = &post.author {
            body.push_str(&format!(
                r#"<section class="section">{}</section>"#,
                avatar(author)
            ));
        }
        if let Some(image) = post
            .cover_image
            .as_ref()
            .and_then(|c| c.responsive_image.as_ref())
        {
            body.push_str(&responsive_image(image, Some("grid__image")));
        }
        body.push_str(&format!(
            r#"<section class="section--narrow">{}</section>"#,
            time_tag(&post.date, &self.config.date_format)
        ));
        body.push_str(&format!(
            r#"<section class="section--narrow"><div class="prose prose-lg prose-blue">{}</div></section>"#,
            content
        ));
        if let Some(video) = &post.youtube {
            body.push_str(&youtube_section(video));
        }
        if !more_posts.is_empty() {
            body.push_str(&self.more_posts_section(more_posts));
        }
        body.push_str("</div>");
        body.push_str(&header.script());

        Ok(format!(
            "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n{}\n</head>\n<body>\n{}\n</body>\n</html>\n",
            html_escape(&self.config.language),
            self.head(post),
            body
        ))
    }

    fn head(&self, post: &Post) -> String {
        let mut head = vec![
            r#"<meta charset="utf-8">"#.to_string(),
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#.to_string(),
        ];

        let seo: Vec<String> = post.seo.iter().filter_map(meta_tag).collect();
        if !seo.iter().any(|t| t.starts_with("<title>")) {
            head.push(format!(
                "<title>{} | {}</title>",
                html_escape(&post.title),
                html_escape(&self.config.title)
            ));
        }
        head.extend(seo);

        if let Some(og) = &post.og_image {
            if !post.seo.iter().any(is_og_image) {
                head.push(format!(
                    r#"<meta property="og:image" content="{}">"#,
                    html_escape(&og.url)
                ));
            }
        }

        head.push(format!(
            r#"<link rel="canonical" href="{}">"#,
            html_escape(&full_url_for(&self.config, &post_path(&post.slug)))
        ));
        head.push(css(&self.config, INDEX_CSS_PATH));
        head.push(css(&self.config, CODE_CSS_PATH));
        head.join("\n")
    }

    fn more_posts_section(&self, posts: &[Post]) -> String {
        let items: String = posts
            .iter()
            .map(|post| {
                let mut card = String::from("<div>");
                if let Some(image) = post
                    .cover_image
                    .as_ref()
                    .and_then(|c| c.responsive_image.as_ref())
                {
                    card.push_str(&responsive_image(image, Some("grid__image")));
                }
                card.push_str(&format!(
                    r#"<p class="grid__title">{}</p>"#,
                    html_escape(&post.title)
                ));
                card.push_str(&time_tag(&post.date, &self.config.date_format));
                if let Some(excerpt) = &post.excerpt {
                    card.push_str(&format!(r#"<p class="date">{}</p>"#, html_escape(excerpt)));
                }
                if let Some(author) = &post.author {
                    card.push_str(&avatar(author));
                }
                card.push_str("</div>");

                format!(
                    r#"<li class="grid__item">{}</li>"#,
                    link_to(
                        &self.config,
                        &post_path(&post.slug),
                        &card,
                        Some("grid__link")
                    )
                )
            })
            .collect();

        format!(
            r#"<section class="section"><div class="section__title">More posts</div><ul class="grid">{}</ul></section>"#,
            items
        )
    }
}

fn is_og_image(tag: &MetaTag) -> bool {
    tag.attributes
        .as_ref()
        .and_then(|a| a.get("property"))
        .and_then(|p| p.as_str())
        == Some("og:image")
}

/// Author picture and name
fn avatar(author: &Author) -> String {
    let picture = author
        .picture
        .as_ref()
        .map(|p| image_tag(&p.url, Some(&author.name), Some("avatar__picture")))
        .unwrap_or_default();

    format!(
        r#"<div class="avatar">{}<div class="avatar__name">{}</div></div>"#,
        picture,
        html_escape(&author.name)
    )
}

/// Responsive 16:9 YouTube player
fn youtube_section(video: &Video) -> String {
    format!(
        r#"<section class="section"><div><div style="position: relative; padding-bottom: 56.25%; height: 0; overflow: hidden;"><iframe src="{src}" title="{title}" style="position: absolute; top: 0; left: 0; width: 100%; height: 100%;" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe></div></div></section>"#,
        src = html_escape(&video.embed_url()),
        title = html_escape(video.title.as_deref().unwrap_or("")),
    )
}
