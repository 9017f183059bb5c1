//! sakamichi-render: renderer for translated idol-group blog bodies
//!
//! Bodies arrive from the translation backend in one of three shapes:
//! structured `[NEWLINE:n]`/`[IMAGE:n]` tokens, legacy Markdown, or plain
//! text. This crate detects which, and renders each to HTML ready to be
//! inserted into a page.

pub mod commands;
pub mod config;
pub mod content;
pub mod group;
pub mod helpers;

pub use config::RenderConfig;
pub use content::{BlogPost, ContentFormat, ContentRenderer, ContentToken};
pub use group::Group;

/// Render a raw body with the default configuration
///
/// `group` is any key or display name (`nogizaka`, `櫻坂46`...).
pub fn render(raw: &str, group: &str) -> String {
    ContentRenderer::default().render(raw, Group::resolve(group))
}

/// Classify a body as structured, markdown or unknown
pub fn detect_format(text: &str) -> ContentFormat {
    content::detect_format(text)
}

/// Image URLs of a body, in the order `[IMAGE:n]` indexes them
pub fn extract_image_urls(text: &str) -> Vec<String> {
    content::extract_image_urls(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_render() {
        let html = render("「こんにちは\n世界」\n次の文", "乃木坂46");
        assert_eq!(html, "「こんにちは世界」<br>次の文<br>");
    }

    #[test]
    fn test_top_level_detect_and_extract() {
        assert_eq!(detect_format("**x**\n[NEWLINE:1]"), ContentFormat::Structured);
        assert_eq!(
            extract_image_urls("![a](https://x/1.jpg)"),
            vec!["https://x/1.jpg".to_string()]
        );
    }
}
