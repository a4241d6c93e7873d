//! Helper functions shared by the content pipeline
//!
//! Small, pure functions for dates, titles and HTML post-processing.

mod date;
mod html;
mod text;

pub use date::*;
pub use html::*;
pub use text::*;
