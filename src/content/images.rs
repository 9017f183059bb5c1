//! Image URL extraction
//!
//! `[IMAGE:n]` tokens index into the list returned here, 1-based, so the
//! order must be the order of appearance in the body.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MARKDOWN_IMAGE: Regex = Regex::new(r"!\[(.*?)\]\((https?://[^)]+)\)").unwrap();
    static ref BARE_IMAGE_URL: Regex =
        Regex::new(r"(?i)https?://\S+\.(?:jpg|jpeg|png|gif|webp)").unwrap();
}

/// Collect image URLs in order of appearance
///
/// Markdown images `![alt](http...)` are collected first, duplicates kept.
/// Only when there are none is the body scanned for bare URLs ending in an
/// image extension.
pub fn extract_image_urls(text: &str) -> Vec<String> {
    let images: Vec<String> = MARKDOWN_IMAGE
        .captures_iter(text)
        .map(|caps| caps[2].to_string())
        .collect();

    if !images.is_empty() {
        return images;
    }

    BARE_IMAGE_URL
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
