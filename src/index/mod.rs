//! Home page listing
//!
//! The home page is an ordinary HTML file owned by the user. A generated
//! block (`<h2>Blog</h2>` through the next `</ul>`) is removed on every run
//! and a fresh one is inserted in front of the `<h2>Projects</h2>` heading.
//! Both steps are plain text matching, not HTML parsing.

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::PathBuf;

use crate::content::Post;
use crate::error::Error;
use crate::Blog;

/// Heading the listing is inserted in front of
pub const PROJECTS_MARKER: &str = "<h2>Projects</h2>";

lazy_static! {
    static ref BLOG_SECTION: Regex = Regex::new(r"(?s)\s*<h2>Blog</h2>.*?</ul>").unwrap();
}

/// Rewrites the blog listing of the home page
#[derive(Debug, Clone)]
pub struct IndexUpdater {
    home_page: PathBuf,
    blog_url: String,
}

impl IndexUpdater {
    pub fn new(blog: &Blog) -> Self {
        Self {
            home_page: blog.home_page.clone(),
            blog_url: blog.config.blog_url.clone(),
        }
    }

    /// Replace the listing in the home page with one for `posts`
    ///
    /// `posts` is expected newest first.
    pub fn update(&self, posts: &[Post]) -> Result<()> {
        let html = fs::read_to_string(&self.home_page).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::MissingHomePage(self.home_page.clone())
            } else {
                Error::io(&self.home_page, e)
            }
        })?;

        let listing = self.build_listing(posts);
        if !html.contains(PROJECTS_MARKER) {
            tracing::warn!(
                "No {} heading in {:?}, blog listing not inserted",
                PROJECTS_MARKER,
                self.home_page
            );
        }

        let updated = splice(&html, &listing);
        fs::write(&self.home_page, updated).map_err(|e| Error::io(&self.home_page, e))?;
        tracing::info!("Updated {:?} with {} posts", self.home_page, posts.len());

        Ok(())
    }

    /// Build the `<h2>Blog</h2>` block, empty when there are no posts
    pub fn build_listing(&self, posts: &[Post]) -> String {
        if posts.is_empty() {
            return String::new();
        }

        let mut out = String::from("\n        <h2>Blog</h2>\n        <ul>\n");
        for post in posts {
            out.push_str(&format!(
                "            <li><a href=\"{}{}\">{}</a>\n",
                self.blog_url,
                post.file_name(),
                post.title
            ));
            out.push_str(&format!(
                "                <div class=\"project-desc\">{}</div>\n",
                post.date
            ));
            out.push_str("            </li>\n");
        }
        out.push_str("        </ul>");

        out
    }
}

/// Drop every old blog block and insert `listing` before the projects heading
///
/// The listing goes in front of all whitespace leading up to the heading and
/// that whitespace follows the listing. Removing a block also removes the
/// whitespace before it, so a second run gets back the same document.
pub fn splice(html: &str, listing: &str) -> String {
    let mut html = BLOG_SECTION.replace_all(html, "").into_owned();

    if listing.is_empty() {
        return html;
    }

    if let Some(pos) = html.find(PROJECTS_MARKER) {
        let leading: usize = html[..pos]
            .chars()
            .rev()
            .take_while(|c| c.is_whitespace())
            .map(char::len_utf8)
            .sum();
        html.insert_str(pos - leading, listing);
    }

    html
}
