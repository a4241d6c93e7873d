//! HTML helper functions

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// Only the exact `alt`-then-`src`, self-closed shape is captioned
    static ref CAPTIONED_IMAGE: Regex =
        Regex::new(r#"<img\s+alt="([^"]+)"\s+src="([^"]+)"\s*/>"#).unwrap();
}

/// Wrap images in a figure with their alt text as caption
///
/// # Examples
/// ```ignore
/// add_image_captions(r#"<img alt="Cat" src="cat.png" />"#)
/// // -> <figure><img src="cat.png" alt="Cat"><figcaption>Cat</figcaption></figure>
/// ```
pub fn add_image_captions(html: &str) -> String {
    CAPTIONED_IMAGE
        .replace_all(html, |caps: &Captures| {
            let alt = &caps[1];
            let src = &caps[2];
            format!(
                r#"<figure><img src="{}" alt="{}"><figcaption>{}</figcaption></figure>"#,
                src, alt, alt
            )
        })
        .into_owned()
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
