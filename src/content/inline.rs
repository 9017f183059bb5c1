//! Inline Markdown processing: images, bold and bare links
//!
//! Each pass only matches Markdown syntax, never the HTML a previous pass
//! produced, so running the processor over its own output changes nothing.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::config::RenderConfig;
use crate::helpers::{external_link, image_tag};

lazy_static! {
    static ref IMAGE: Regex = Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap();
    static ref BOLD: Regex = Regex::new(r"\*\*(.*?)\*\*").unwrap();
    // Existing anchors match whole and are kept; a URL right after a quote
    // or `=` is an attribute value
    static ref BARE_URL: Regex =
        Regex::new(r#"(<a\s[^>]*>.*?</a>)|(^|[^"'=])(https?://[^\s<>"']+)"#).unwrap();
}

const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];

/// Converts the Markdown subset used by blog bodies into HTML
#[derive(Debug, Clone)]
pub struct InlineProcessor {
    image_class: String,
    image_alt: String,
    link_rel: String,
    link_style: Option<String>,
}

impl InlineProcessor {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            image_class: config.image_class.clone(),
            image_alt: config.image_alt.clone(),
            link_rel: config.link_rel.clone(),
            link_style: config.link_style.clone(),
        }
    }

    /// Run every pass in order: images, bold, links
    pub fn process(&self, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }

        let result = self.process_images(content);
        let result = self.process_bold(&result);
        self.process_links(&result)
    }

    /// `![alt](url)` -> lazy `<img>`, empty alt replaced by the default
    pub fn process_images(&self, content: &str) -> String {
        IMAGE
            .replace_all(content, |caps: &Captures| {
                let alt = match &caps[1] {
                    "" => self.image_alt.as_str(),
                    alt => alt,
                };
                image_tag(&caps[2], alt, &self.image_class)
            })
            .into_owned()
    }

    /// `**text**` -> `<strong>`
    pub fn process_bold(&self, content: &str) -> String {
        BOLD.replace_all(content, "<strong>$1</strong>").into_owned()
    }

    /// Wrap bare `http(s)://` URLs in anchors; image URLs stay as they are
    pub fn process_links(&self, content: &str) -> String {
        BARE_URL
            .replace_all(content, |caps: &Captures| {
                let Some(url) = caps.get(3).map(|m| m.as_str()) else {
                    return caps[0].to_string();
                };
                if is_image_url(url) {
                    return caps[0].to_string();
                }
                format!(
                    "{}{}",
                    &caps[2],
                    external_link(url, &self.link_rel, self.link_style.as_deref())
                )
            })
            .into_owned()
    }
}

impl Default for InlineProcessor {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

fn is_image_url(url: &str) -> bool {
    let url = url.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| url.contains(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_image_default_alt() {
        let p = InlineProcessor::default();
        assert_eq!(
            p.process("![](http://x/1.jpg)"),
            r#"<img src="http://x/1.jpg" alt="图片" class="w-full my-4 rounded-lg" loading="lazy" />"#
        );
        assert!(p.process("![猫](http://x/1.jpg)").contains(r#"alt="猫""#));
    }

    #[test]
    fn test_process_bold() {
        let p = InlineProcessor::default();
        assert_eq!(p.process("今日は**晴れ**です"), "今日は<strong>晴れ</strong>です");
    }

    #[test]
    fn test_process_links() {
        let p = InlineProcessor::default();
        assert_eq!(
            p.process("見てhttps://example.com/page ね"),
            r#"見て<a href="https://example.com/page" target="_blank" rel="noopener noreferrer">https://example.com/page</a> ね"#
        );
    }

    #[test]
    fn test_image_urls_not_linkified() {
        let p = InlineProcessor::default();
        assert_eq!(p.process("https://x/photo.JPG"), "https://x/photo.JPG");
    }

    #[test]
    fn test_links_after_tags() {
        let p = InlineProcessor::default();
        assert_eq!(
            p.process("**https://example.com/page**"),
            r#"<strong><a href="https://example.com/page" target="_blank" rel="noopener noreferrer">https://example.com/page</a></strong>"#
        );
        assert!(p
            .process("**a**https://x.com")
            .ends_with(r#"</strong><a href="https://x.com" target="_blank" rel="noopener noreferrer">https://x.com</a>"#));
    }

    #[test]
    fn test_several_links_on_one_line() {
        let p = InlineProcessor::default();
        let html = p.process("http://a.com http://b.com");
        assert_eq!(html.matches("<a ").count(), 2);
    }

    #[test]
    fn test_idempotent() {
        let p = InlineProcessor::new(&RenderConfig {
            link_style: Some("color: #2563eb".to_string()),
            ..Default::default()
        });
        let inputs = [
            "![p](http://x/1.jpg) **Hi** https://example.com/a?b=1",
            "https://example.com\nhttps://example.org/x",
            "**a** **b** ![](https://x/2.png)",
            "**https://example.com/page** and **a**https://x.com",
            "plain text",
        ];
        for input in inputs {
            let once = p.process(input);
            assert_eq!(p.process(&once), once, "input: {}", input);
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(InlineProcessor::default().process(""), "");
    }
}
