//! Markdown rendering with syntax highlighting

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::HighlightConfig;
use crate::helpers::html_escape;

/// Markdown renderer with syntax highlighting
///
/// The renderer only holds the syntax and theme sets; every call to
/// [`MarkdownRenderer::render`] starts from a fresh parser, so documents
/// never influence each other.
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    line_numbers: bool,
}

/// Image being collected between its start and end events
struct PendingImage {
    src: String,
    title: String,
    alt: String,
    depth: usize,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_options(&HighlightConfig::default())
    }

    /// Create with custom settings
    pub fn with_options(highlight: &HighlightConfig) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: highlight.theme.clone(),
            line_numbers: highlight.line_number,
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        // Plain CommonMark: front-matter is stripped before we get here
        let parser = Parser::new_ext(markdown, Options::empty());

        let mut events: Vec<Event> = Vec::new();
        let mut code_block: Option<(Option<String>, String)> = None;
        let mut image: Option<PendingImage> = None;

        for event in parser {
            if let Some((lang, code)) = code_block.as_mut() {
                match event {
                    Event::Text(text) => code.push_str(&text),
                    Event::End(TagEnd::CodeBlock) => {
                        let highlighted = self.highlight_code(code, lang.as_deref());
                        events.push(Event::Html(CowStr::from(highlighted)));
                        code_block = None;
                    }
                    _ => {}
                }
                continue;
            }

            if let Some(pending) = image.as_mut() {
                match event {
                    Event::Start(Tag::Image { .. }) => pending.depth += 1,
                    Event::End(TagEnd::Image) if pending.depth > 0 => pending.depth -= 1,
                    Event::End(TagEnd::Image) => {
                        events.push(Event::Html(CowStr::from(image_tag(pending))));
                        image = None;
                    }
                    Event::Text(text) | Event::Code(text) => pending.alt.push_str(&text),
                    Event::SoftBreak | Event::HardBreak => pending.alt.push('\n'),
                    _ => {}
                }
                continue;
            }

            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => info
                            .split_whitespace()
                            .next()
                            .filter(|l| !l.is_empty())
                            .map(str::to_string),
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::Start(Tag::Image {
                    dest_url, title, ..
                }) => {
                    image = Some(PendingImage {
                        src: dest_url.to_string(),
                        title: title.to_string(),
                        alt: String::new(),
                        depth: 0,
                    });
                }
                _ => events.push(event),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        html_output
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");
        let lang_class = html_escape(lang);

        // Try to find syntax for the language
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let highlighted = self
            .theme()
            .and_then(|theme| highlighted_html_for_string(code, &self.syntax_set, syntax, theme).ok());

        match highlighted {
            Some(highlighted) if self.line_numbers => {
                self.add_line_numbers(&highlighted, code.lines().count(), &lang_class)
            }
            Some(highlighted) => format!(r#"<div class="codehilite">{}</div>"#, highlighted),
            None => {
                tracing::debug!("Highlighting unavailable for {}, emitting plain block", lang);
                format!(
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    lang_class,
                    html_escape(code)
                )
            }
        }
    }

    fn theme(&self) -> Option<&Theme> {
        self.theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())
    }

    /// Add line numbers to highlighted code, `lang` already escaped
    fn add_line_numbers(&self, code: &str, line_count: usize, lang: &str) -> String {
        let gutter = (1..=line_count.max(1))
            .map(|i| format!(r#"<span class="line-number">{}</span>"#, i))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<div class="codehilite {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code">{}</td></tr></table></div>"#,
            lang,
            gutter,
            code.trim_end_matches('\n')
        )
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Images come out alt-first so the caption pass can pick them up
fn image_tag(image: &PendingImage) -> String {
    let title = if image.title.is_empty() {
        String::new()
    } else {
        format!(r#" title="{}""#, html_escape(&image.title))
    };
    format!(
        r#"<img alt="{}" src="{}"{} />"#,
        html_escape(&image.alt),
        html_escape(&image.src),
        title
    )
}
