//! Content loader - turns markdown files from the posts directory into posts

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownRenderer, Post};
use crate::error::Error;
use crate::helpers::{add_image_captions, parse_post_date, title_from_stem, today};
use crate::templates::PageRenderer;
use crate::Blog;

/// Loads and renders posts from the posts directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
    page_renderer: PageRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        let renderer = MarkdownRenderer::with_options(&blog.config.highlight);
        let page_renderer = PageRenderer::new(blog.config.site_name.clone());
        Self {
            blog,
            renderer,
            page_renderer,
        }
    }

    /// List the markdown files directly inside the posts directory
    ///
    /// Order is whatever the filesystem returns.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.blog.posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = entry
                .with_context(|| format!("reading posts directory {:?}", self.blog.posts_dir))?;
            let path = entry.path();
            if entry.file_type().is_file() && is_markdown_file(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    /// Load a single post from a file and render its page
    pub fn load_post(&self, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let (fm, body) = FrontMatter::parse(&content);

        let slug = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let title = fm
            .title()
            .map(str::to_string)
            .unwrap_or_else(|| title_from_stem(&slug));
        let date = fm.date().map(str::to_string).unwrap_or_else(today);
        let date_value = parse_post_date(&date).map_err(|source| Error::InvalidDate {
            source_file: path.to_path_buf(),
            value: date.clone(),
            source,
        })?;

        let content_html = add_image_captions(&self.renderer.render(body));
        let html = self.page_renderer.render(&title, &date, &content_html);

        tracing::debug!("Rendered {:?} as {:?} ({})", path, title, date);

        Ok(Post {
            title,
            date,
            date_value,
            slug,
            source: path.to_path_buf(),
            html,
        })
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("md")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn blog_in(dir: &TempDir) -> Blog {
        let blog = Blog::new(dir.path()).unwrap();
        fs::create_dir_all(&blog.posts_dir).unwrap();
        blog
    }

    #[test]
    fn test_is_markdown_file() {
        assert!(is_markdown_file(Path::new("posts/hello.md")));
        assert!(!is_markdown_file(Path::new("posts/hello.markdown")));
        assert!(!is_markdown_file(Path::new("posts/hello.MD")));
        assert!(is_markdown_file(Path::new("posts/.draft.md")));
        assert!(!is_markdown_file(Path::new("posts/notes.txt")));
    }

    #[test]
    fn test_discover_is_not_recursive() {
        let dir = TempDir::new().unwrap();
        let blog = blog_in(&dir);
        fs::write(blog.posts_dir.join("top.md"), "# Top").unwrap();
        fs::write(blog.posts_dir.join("notes.txt"), "ignored").unwrap();
        fs::create_dir_all(blog.posts_dir.join("nested")).unwrap();
        fs::write(blog.posts_dir.join("nested/deep.md"), "# Deep").unwrap();

        let loader = ContentLoader::new(&blog);
        let files = loader.discover().unwrap();
        assert_eq!(files, vec![blog.posts_dir.join("top.md")]);
    }

    #[test]
    fn test_discover_includes_dot_files() {
        let dir = TempDir::new().unwrap();
        let blog = blog_in(&dir);
        fs::write(
            blog.posts_dir.join(".notes.md"),
            "---\ntitle: Notes\ndate: 2026-01-01\n---\nBody\n",
        )
        .unwrap();

        let loader = ContentLoader::new(&blog);
        let files = loader.discover().unwrap();
        assert_eq!(files, vec![blog.posts_dir.join(".notes.md")]);

        let post = loader.load_post(&files[0]).unwrap();
        assert_eq!(post.slug, ".notes");
        assert_eq!(post.title, "Notes");
    }

    #[test]
    fn test_load_post_with_header() {
        let dir = TempDir::new().unwrap();
        let blog = blog_in(&dir);
        let path = blog.posts_dir.join("first.md");
        fs::write(
            &path,
            "---\ntitle: My First Post\ndate: 2026-01-30\n---\n\n![Dog](/img/dog.png)\n",
        )
        .unwrap();

        let loader = ContentLoader::new(&blog);
        let post = loader.load_post(&path).unwrap();
        assert_eq!(post.title, "My First Post");
        assert_eq!(post.date, "2026-01-30");
        assert_eq!(post.slug, "first");
        assert!(post.html.contains("<h1>My First Post</h1>"));
        assert!(post
            .html
            .contains(r#"<figure><img src="/img/dog.png" alt="Dog"><figcaption>Dog</figcaption></figure>"#));
    }

    #[test]
    fn test_load_post_defaults() {
        let dir = TempDir::new().unwrap();
        let blog = blog_in(&dir);
        let path = blog.posts_dir.join("hello-world.md");
        fs::write(&path, "Just text.\n").unwrap();

        let loader = ContentLoader::new(&blog);
        let post = loader.load_post(&path).unwrap();
        assert_eq!(post.title, "Hello World");
        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.date_value, parse_post_date(&post.date).unwrap());
    }

    #[test]
    fn test_load_post_invalid_date() {
        let dir = TempDir::new().unwrap();
        let blog = blog_in(&dir);
        let path = blog.posts_dir.join("bad.md");
        fs::write(&path, "---\ndate: January 5th\n---\nBody\n").unwrap();

        let loader = ContentLoader::new(&blog);
        let err = loader.load_post(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidDate { value, .. }) if value == "January 5th"
        ));
    }
}
