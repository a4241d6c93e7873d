//! Text helper functions

/// Turn a file stem into a display title
///
/// Hyphens become spaces, then every letter that does not follow a cased
/// letter is upper-cased and the rest lower-cased.
///
/// # Examples
/// ```ignore
/// title_from_stem("hello-world") // -> "Hello World"
/// ```
pub fn title_from_stem(stem: &str) -> String {
    titlecase(&stem.replace('-', " "))
}

/// Title-case a string word by word
pub fn titlecase(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_cased = false;

    for c in s.chars() {
        if prev_cased {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        prev_cased = c.is_lowercase() || c.is_uppercase();
    }

    result
}
