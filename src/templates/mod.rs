//! Built-in post page template
//!
//! The page layout is embedded in the binary and filled in by plain
//! placeholder substitution. Values are inserted as-is, without escaping.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

const POST_TEMPLATE: &str = include_str!("post.html");

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{ (title|date|content|site_name) \}\}").unwrap();
}

/// Renders complete post pages
#[derive(Debug, Clone)]
pub struct PageRenderer {
    site_name: String,
}

impl PageRenderer {
    /// Create a renderer whose page titles end with `site_name`
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
        }
    }

    /// Render a full HTML document for one post
    ///
    /// Substitution is a single pass over the template, so placeholder text
    /// inside `title`, `date` or `content` is left alone.
    pub fn render(&self, title: &str, date: &str, content: &str) -> String {
        PLACEHOLDER
            .replace_all(POST_TEMPLATE, |caps: &Captures| match &caps[1] {
                "title" => title.to_string(),
                "date" => date.to_string(),
                "content" => content.to_string(),
                _ => self.site_name.clone(),
            })
            .into_owned()
    }
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new("Blog")
    }
}
