//! Front-matter parsing

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `---` line, header lines, `---` line, then the body
    static ref FRONT_MATTER: Regex = Regex::new(r"(?s)^---\s*\n(.*?)\n---\s*\n(.*)$").unwrap();
}

/// Front-matter data from a post
///
/// Holds every `key: value` pair of the header in declaration order. Only
/// `title` and `date` mean anything to the generator; other keys are kept
/// so callers can inspect them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: IndexMap<String, String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// Content without a complete `---` block comes back unchanged with an
    /// empty front-matter. This never fails.
    pub fn parse(content: &str) -> (Self, &str) {
        let Some(caps) = FRONT_MATTER.captures(content) else {
            return (FrontMatter::default(), content);
        };

        let header = caps.get(1).map_or("", |m| m.as_str());
        let body = caps.get(2).map_or("", |m| m.as_str());

        let mut fields = IndexMap::new();
        for line in header.split('\n') {
            // Lines without a separator are not fields
            if let Some((key, value)) = line.split_once(':') {
                fields.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        (Self { fields }, body)
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    /// Raw date string, not validated
    pub fn date(&self) -> Option<&str> {
        self.get("date")
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in the order they were declared
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
