//! List site content

use anyhow::Result;

use crate::content::{ContentSource, Post};
use crate::helpers::format_date;
use crate::Blog;

/// Print all posts, newest first
pub fn run(blog: &Blog) -> Result<()> {
    let posts = blog.source().all_posts()?;
    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!("  {}", summary_line(post));
    }
    Ok(())
}

fn summary_line(post: &Post) -> String {
    let date = post
        .published_at()
        .map(|d| format_date(&d, "%Y-%m-%d"))
        .unwrap_or_else(|| "----------".to_string());
    format!("{} - {} [{}]", date, post.title, post.slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        let post = Post {
            title: "Hello".to_string(),
            slug: "hello".to_string(),
            date: "2023-05-30T08:00:00Z".to_string(),
            ..Post::default()
        };
        assert_eq!(summary_line(&post), "2023-05-30 - Hello [hello]");

        let undated = Post {
            title: "Draft".to_string(),
            slug: "draft".to_string(),
            ..Post::default()
        };
        assert_eq!(summary_line(&undated), "---------- - Draft [draft]");
    }
}
