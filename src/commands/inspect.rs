//! Report what the renderer sees in a body

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use super::read_input;
use crate::content::{
    content_preview, detect_format, extract_image_urls, strip_frontmatter, ContentFormat,
    FrontMatter,
};

/// Summary of a body
#[derive(Debug, Serialize)]
pub struct Inspection {
    pub format: ContentFormat,
    pub frontmatter: Option<FrontMatter>,
    pub images: Vec<String>,
    pub preview: String,
}

/// Inspect a body without rendering it
pub fn inspect(input: &str, preview_length: usize) -> Inspection {
    let (frontmatter, _) = FrontMatter::parse(input);
    let body = strip_frontmatter(input);

    Inspection {
        format: detect_format(body),
        frontmatter,
        images: extract_image_urls(body),
        preview: content_preview(input, preview_length),
    }
}

/// Inspect `path` and format the report as pretty JSON
pub fn run(path: &Path, preview_length: usize) -> Result<String> {
    let input = read_input(path)?;
    let report = inspect(&input, preview_length);
    Ok(serde_json::to_string_pretty(&report)?)
}
