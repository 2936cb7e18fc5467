//! Render a single CMS query response

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::content::PostQuery;
use crate::page::PageRenderer;
use crate::Blog;

/// Render the post in `input` as a full page; writes to `output` or returns the HTML
pub fn run(blog: &Blog, input: &Path, output: Option<&Path>) -> Result<Option<String>> {
    let raw = fs::read_to_string(input).with_context(|| format!("reading {:?}", input))?;
    let query = PostQuery::from_json(&raw).with_context(|| format!("parsing {:?}", input))?;
    let post = query
        .post
        .ok_or_else(|| anyhow::anyhow!("{:?} contains no post", input))?;

    tracing::info!("Rendering `{}`", post.slug);
    let html = PageRenderer::new(&blog.config).render_post(&post, &query.more_posts)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &html)?;
            tracing::info!("Wrote {:?}", path);
            Ok(None)
        }
        None => Ok(Some(html)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    const QUERY: &str = r#"{"data": {
        "post": {"title": "Query", "slug": "query", "date": "2023-05-30",
                 "content": {"value": {"document": {"children": [
                     {"type": "heading", "level": 2, "children": [{"type": "span", "value": "Hi"}]}
                 ]}}}},
        "morePosts": [{"title": "Other", "slug": "other", "date": "2023-01-01"}]
    }}"#;

    #[test]
    fn test_render_to_string() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("query.json");
        fs::write(&input, QUERY).unwrap();

        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        let html = run(&blog, &input, None).unwrap().unwrap();
        assert!(html.contains("<h2><span>Hi</span></h2>"));
        assert!(html.contains(r#"href="/posts/other/""#));
    }

    #[test]
    fn test_render_to_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("query.json");
        let output = dir.path().join("out/page.html");
        fs::write(&input, QUERY).unwrap();

        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        assert!(run(&blog, &input, Some(&output)).unwrap().is_none());
        assert!(fs::read_to_string(&output).unwrap().contains("Query"));
    }

    #[test]
    fn test_missing_post() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("empty.json");
        fs::write(&input, r#"{"data": {"post": null, "morePosts": []}}"#).unwrap();

        let blog = Blog::with_config(dir.path(), SiteConfig::default());
        assert!(run(&blog, &input, None).is_err());
    }
}
