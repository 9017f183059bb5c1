//! Plain-text previews for blog list cards

use lazy_static::lazy_static;
use regex::Regex;

use super::frontmatter::strip_frontmatter;
use crate::helpers::{collapse_whitespace, strip_html, truncate};

/// Shown when a post has no translated body yet
pub const EMPTY_PREVIEW: &str = "暂无翻译内容";

lazy_static! {
    static ref MARKDOWN_IMAGE: Regex = Regex::new(r"!\[.*?\]\(.*?\)").unwrap();
    static ref IMAGE_TOKEN: Regex = Regex::new(r"\[IMAGE:\d+\]").unwrap();
    static ref NEWLINE_TOKEN: Regex = Regex::new(r"\[NEWLINE:\d+\]").unwrap();
}

/// Text-only excerpt of a body, at most `max_chars` characters plus `...`
pub fn content_preview(raw: &str, max_chars: usize) -> String {
    if raw.trim().is_empty() {
        return EMPTY_PREVIEW.to_string();
    }

    let content = strip_frontmatter(raw);
    let content = MARKDOWN_IMAGE.replace_all(content, "");
    let content = IMAGE_TOKEN.replace_all(&content, "");
    let content = NEWLINE_TOKEN.replace_all(&content, " ");
    let content = collapse_whitespace(&strip_html(&content));

    truncate(&content, max_chars, None)
}
