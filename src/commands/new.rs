//! Create a new post

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::error::Error;
use crate::helpers::today;
use crate::Blog;

/// Write a new post with a filled-in header to the posts directory
///
/// Returns the path of the created file. Existing files are never
/// overwritten.
pub fn create_post(blog: &Blog, title: &str) -> Result<PathBuf> {
    fs::create_dir_all(&blog.posts_dir)
        .with_context(|| format!("creating {:?}", blog.posts_dir))?;

    let mut slug = slug::slugify(title);
    if slug.is_empty() {
        slug = "untitled".to_string();
    }
    let file_path = blog.posts_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        return Err(Error::PostExists(file_path).into());
    }

    let content = format!(
        "---\ntitle: {}\ndate: {}\n---\n\nYour content here in **markdown**!\n",
        title.trim(),
        today()
    );
    fs::write(&file_path, content).map_err(|e| Error::io(&file_path, e))?;

    println!("Created: {}", blog.display_path(&file_path).display());
    tracing::debug!("New post {:?} at {:?}", title, file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;
    use tempfile::TempDir;

    #[test]
    fn test_create_post() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        let path = create_post(&blog, "Hello, World!").unwrap();
        assert_eq!(path, blog.posts_dir.join("hello-world.md"));

        let content = fs::read_to_string(&path).unwrap();
        let (fm, body) = FrontMatter::parse(&content);
        assert_eq!(fm.title(), Some("Hello, World!"));
        assert_eq!(fm.date(), Some(today().as_str()));
        assert!(body.contains("**markdown**"));
    }

    #[test]
    fn test_create_post_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        create_post(&blog, "Twice").unwrap();
        let err = create_post(&blog, "Twice").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::PostExists(_))
        ));
    }

    #[test]
    fn test_created_post_generates() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        fs::write(&blog.home_page, "<h2>Projects</h2>\n").unwrap();

        create_post(&blog, "Fresh Start").unwrap();
        let summary = blog.generate().unwrap();
        assert_eq!(summary.posts[0].title, "Fresh Start");
        assert_eq!(summary.posts[0].slug, "fresh-start");
    }
}
