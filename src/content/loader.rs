//! Content loader - reads CMS post records from the content directory

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::Post;

/// Anything that can answer the post queries a page needs
pub trait ContentSource {
    /// Look up a single post by slug
    fn post_by_slug(&self, slug: &str) -> Result<Option<Post>>;

    /// All posts, newest first
    fn all_posts(&self) -> Result<Vec<Post>>;

    /// Newest posts other than `exclude_slug`, at most `limit` of them
    fn more_posts(&self, exclude_slug: &str, limit: usize) -> Result<Vec<Post>> {
        Ok(self
            .all_posts()?
            .into_iter()
            .filter(|p| p.slug != exclude_slug)
            .take(limit)
            .collect())
    }
}

/// Post records stored as JSON files, one record per file
pub struct FileSource {
    content_dir: PathBuf,
}

impl FileSource {
    /// Create a new source rooted at `content_dir`
    pub fn new<P: AsRef<Path>>(content_dir: P) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
        }
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post> {
        let raw = fs::read_to_string(path)?;
        let mut post: Post =
            serde_json::from_str(&raw).with_context(|| format!("invalid post record {:?}", path))?;

        // Records exported without a slug fall back to the file name
        if post.slug.is_empty() {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("untitled");
            post.slug = slug::slugify(stem);
        }

        Ok(post)
    }
}

impl ContentSource for FileSource {
    fn post_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        Ok(self.all_posts()?.into_iter().find(|p| p.slug == slug))
    }

    fn all_posts(&self) -> Result<Vec<Post>> {
        if !self.content_dir.exists() {
            tracing::debug!("Content directory {:?} does not exist", self.content_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&self.content_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_json_file(path) {
                match self.load_post(path) {
                    Ok(post) => posts.push(post),
                    Err(e) => {
                        tracing::warn!("Failed to load post {:?}: {:#}", path, e);
                    }
                }
            }
        }

        // Sort by date descending (newest first); undated posts go last
        posts.sort_by(|a, b| b.published_at().cmp(&a.published_at()));

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), self.content_dir);
        Ok(posts)
    }
}

/// Check if a file is a JSON record
fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_post(dir: &Path, file: &str, slug: &str, date: &str) {
        let json = format!(
            r#"{{"title": "Post {slug}", "slug": "{slug}", "date": "{date}"}}"#,
            slug = slug,
            date = date
        );
        fs::write(dir.join(file), json).unwrap();
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "a.json", "oldest", "2021-01-01");
        write_post(dir.path(), "b.json", "newest", "2023-06-01");
        write_post(dir.path(), "c.json", "middle", "2022-03-15");
        fs::write(dir.path().join("notes.txt"), "not a post").unwrap();
        fs::write(dir.path().join("broken.json"), "{ nope").unwrap();
        dir
    }

    #[test]
    fn test_all_posts_sorted_newest_first() {
        let dir = fixture();
        let source = FileSource::new(dir.path());
        let slugs: Vec<_> = source
            .all_posts()
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(slugs, vec!["newest", "middle", "oldest"]);
    }

    #[test]
    fn test_post_by_slug() {
        let dir = fixture();
        let source = FileSource::new(dir.path());
        let post = source.post_by_slug("middle").unwrap().unwrap();
        assert_eq!(post.title, "Post middle");
        assert!(source.post_by_slug("missing").unwrap().is_none());
    }

    #[test]
    fn test_more_posts_excludes_current() {
        let dir = fixture();
        let source = FileSource::new(dir.path());
        let more: Vec<_> = source
            .more_posts("newest", 2)
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();
        assert_eq!(more, vec!["middle", "oldest"]);
    }

    #[test]
    fn test_slug_falls_back_to_file_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("My First Post.json"), r#"{"title": "x"}"#).unwrap();
        let source = FileSource::new(dir.path());
        let posts = source.all_posts().unwrap();
        assert_eq!(posts[0].slug, "my-first-post");
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let source = FileSource::new("/nonexistent/codewcaro/content");
        assert!(source.all_posts().unwrap().is_empty());
    }
}
