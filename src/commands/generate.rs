//! Generate static files

use anyhow::Result;
use std::fs;
use std::path::{Component, Path};

use crate::content::{ContentSource, Post};
use crate::page::{PageRenderer, CODE_CSS_PATH, INDEX_CSS_PATH};
use crate::Blog;

/// Generate every post page plus the site and code stylesheets
pub fn run(blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    let source = blog.source();
    let posts = source.all_posts()?;
    tracing::info!("Loaded {} posts", posts.len());

    let pages = PageRenderer::new(&blog.config);

    write_file(&blog.public_dir.join(CODE_CSS_PATH), &pages.code_css())?;
    write_file(&blog.public_dir.join(INDEX_CSS_PATH), pages.index_css())?;

    // Only posts that get a page of their own may be linked from other pages
    let publishable: Vec<&Post> = posts.iter().filter(|p| is_publishable(p)).collect();

    let mut written = 0;
    for post in &publishable {
        let more: Vec<Post> = publishable
            .iter()
            .filter(|p| p.slug != post.slug)
            .take(blog.config.more_posts)
            .map(|p| (*p).clone())
            .collect();

        match pages.render_post(post, &more) {
            Ok(html) => {
                let path = blog
                    .public_dir
                    .join("posts")
                    .join(&post.slug)
                    .join("index.html");
                write_file(&path, &html)?;
                tracing::debug!("Generated: {:?}", path);
                written += 1;
            }
            Err(e) => {
                tracing::warn!("Failed to render post {}: {:#}", post.slug, e);
            }
        }
    }

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} of {} posts in {:.2}s",
        written,
        posts.len(),
        duration.as_secs_f64()
    );

    Ok(())
}

/// Whether a post can be written to its own page
fn is_publishable(post: &Post) -> bool {
    if !is_safe_slug(&post.slug) {
        tracing::warn!("Skipping post with unusable slug {:?}", post.slug);
        return false;
    }
    if let Err(e) = post.document() {
        tracing::warn!("Skipping post {}: {}", post.slug, e);
        return false;
    }
    true
}

/// A slug must map to exactly one directory under `posts/`
fn is_safe_slug(slug: &str) -> bool {
    let mut components = Path::new(slug).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
