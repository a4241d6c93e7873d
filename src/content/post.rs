//! Post model

use chrono::NaiveDate;
use std::path::PathBuf;

/// A processed blog post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Publication date exactly as written (or today's date)
    pub date: String,

    /// Parsed publication date, used for ordering
    pub date_value: NaiveDate,

    /// File stem of the source, used verbatim in the output file name
    pub slug: String,

    /// Full source file path
    pub source: PathBuf,

    /// Rendered HTML page
    pub html: String,
}

impl Post {
    /// Output file name, `<slug>.html`
    pub fn file_name(&self) -> String {
        format!("{}.html", self.slug)
    }
}

/// Sort posts newest first
///
/// The sort is stable: posts sharing a date keep their discovery order.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.date_value.cmp(&a.date_value));
}
