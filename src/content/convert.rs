//! Legacy Markdown to structured-token conversion

use lazy_static::lazy_static;
use regex::Regex;

use super::format::has_structured_tokens;
use super::frontmatter::strip_frontmatter;
use super::token::ContentToken;

lazy_static! {
    static ref MARKDOWN_IMAGE: Regex = Regex::new(r"!\[.*?\]\((https?://[^)]+)\)").unwrap();
}

/// Rewrite a Markdown body into the structured token format
///
/// Images become `[IMAGE:n]` numbered from 1 in order of appearance, lines
/// are trimmed, and each run of k blank lines becomes `[NEWLINE:k]`.
/// A body that already carries tokens is returned unchanged.
pub fn convert_to_structured(markdown: &str) -> String {
    if markdown.is_empty() || has_structured_tokens(markdown) {
        return markdown.to_string();
    }

    let content = strip_frontmatter(markdown);

    let mut counter = 0;
    let content = MARKDOWN_IMAGE.replace_all(content, |_: &regex::Captures| {
        counter += 1;
        ContentToken::ImagePlaceholder(counter).to_string()
    });

    let mut out: Vec<String> = Vec::new();
    let mut blank_run = 0;

    for line in content.split('\n').map(str::trim) {
        if line.is_empty() {
            blank_run += 1;
            continue;
        }
        if blank_run > 0 {
            out.push(ContentToken::LineBreak(blank_run).to_string());
            blank_run = 0;
        }
        out.push(line.to_string());
    }

    if blank_run > 0 {
        out.push(ContentToken::LineBreak(blank_run).to_string());
    }

    out.join("\n")
}
