//! Body rendering: format dispatch, structured tokens and the legacy path

use std::borrow::Cow;

use crate::config::RenderConfig;
use crate::group::Group;
use crate::helpers::{html_escape, image_placeholder, image_tag, truncate};

use super::convert::convert_to_structured;
use super::format::ContentFormat;
use super::frontmatter::strip_frontmatter;
use super::images::extract_image_urls;
use super::inline::InlineProcessor;
use super::strategy::Layout;
use super::token::{tokenize_structured, ContentToken, MAX_LINE_BREAKS};

/// Characters of body shown in the legacy-path warning
const LOG_PREVIEW_CHARS: usize = 200;

/// Renders translated blog bodies to HTML
///
/// Rendering never fails: malformed tokens become text, unknown images
/// become placeholder comments.
#[derive(Debug, Clone)]
pub struct ContentRenderer {
    config: RenderConfig,
    inline: InlineProcessor,
}

impl ContentRenderer {
    pub fn new(config: RenderConfig) -> Self {
        let inline = InlineProcessor::new(&config);
        Self { config, inline }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a raw body for a group
    pub fn render(&self, raw: &str, group: Group) -> String {
        self.render_with_images(raw, group, &[])
    }

    /// Render with a caller-supplied image list
    ///
    /// `images` only applies when the body itself yields no image URLs.
    pub fn render_with_images(&self, raw: &str, group: Group, images: &[String]) -> String {
        let body = strip_frontmatter(raw);
        let format = ContentFormat::detect(body);
        tracing::debug!("Rendering {} body for {} ({} bytes)", format, group, body.len());

        match format {
            ContentFormat::Structured => {
                let mut extracted = extract_image_urls(body);
                if extracted.is_empty() {
                    extracted = images.to_vec();
                }
                self.render_structured(body, &extracted)
            }
            ContentFormat::Markdown | ContentFormat::Unknown => self.render_legacy(body, group),
        }
    }

    /// Render a structured body against a resolved image list
    pub fn render_structured(&self, body: &str, images: &[String]) -> String {
        let tokens = tokenize_structured(body);
        tracing::debug!(
            "Structured body: {} tokens, {} images",
            tokens.len(),
            images.len()
        );
        self.render_tokens(&tokens, images)
    }

    /// Serialize tokens to HTML
    pub fn render_tokens(&self, tokens: &[ContentToken], images: &[String]) -> String {
        let mut out = String::new();

        for token in tokens {
            match token {
                ContentToken::TextRun(text) => out.push_str(&self.process_text(text)),
                ContentToken::LineBreak(count) => {
                    // Tokens built by hand skip the parser's limit
                    out.push_str(&self.config.line_break.repeat((*count).min(MAX_LINE_BREAKS)));
                }
                ContentToken::ImagePlaceholder(index) => {
                    match index.checked_sub(1).and_then(|i| images.get(i)) {
                        Some(url) => out.push_str(&image_tag(
                            &self.escape(url),
                            &format!("{}{}", self.config.image_alt, index),
                            &self.config.image_class,
                        )),
                        None => {
                            tracing::debug!(
                                "Image {} out of range ({} images)",
                                index,
                                images.len()
                            );
                            out.push_str(&image_placeholder(*index));
                        }
                    }
                }
            }
        }

        out
    }

    /// Render a body without structured tokens using the group's strategy
    pub fn render_legacy(&self, body: &str, group: Group) -> String {
        tracing::warn!(
            "No structured tags for {}, using legacy renderer: {}",
            group,
            truncate(body, LOG_PREVIEW_CHARS, None)
        );

        let html = self.process_text(body);
        let kind = self.config.strategy_for(group);
        tracing::debug!("Line-merge strategy for {}: {}", group, kind);

        kind.strategy().merge(&html, &self.layout())
    }

    /// Convert a Markdown body to tokens first, then render those
    ///
    /// Images are numbered from the Markdown body before conversion, so
    /// every `![..](url)` comes back as an image.
    pub fn render_converted(&self, raw: &str) -> String {
        let body = strip_frontmatter(raw);
        let images = extract_image_urls(body);
        let structured = convert_to_structured(body);
        self.render_structured(&structured, &images)
    }

    /// Escape (when enabled) and run inline Markdown
    fn process_text(&self, text: &str) -> String {
        self.inline.process(&self.escape(text))
    }

    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.config.escape_text {
            Cow::Owned(html_escape(text))
        } else {
            Cow::Borrowed(text)
        }
    }

    fn layout(&self) -> Layout<'_> {
        Layout {
            line_break: &self.config.line_break,
            min_merge_chars: self.config.min_merge_chars,
        }
    }
}

impl Default for ContentRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(urls: &[&str]) -> Vec<String> {
        urls.iter().map(|u| u.to_string()).collect()
    }

    #[test]
    fn test_image_token_resolves_to_url() {
        let renderer = ContentRenderer::default();
        let html = renderer.render_structured(
            "[IMAGE:2]",
            &images(&["http://x/1.jpg", "http://x/2.jpg"]),
        );
        assert_eq!(html.matches("<img").count(), 1);
        assert!(html.contains(r#"src="http://x/2.jpg""#));
        assert!(html.contains(r#"alt="图片2""#));
    }

    #[test]
    fn test_image_token_out_of_range() {
        let renderer = ContentRenderer::default();
        for body in ["[IMAGE:3]", "[IMAGE:0]"] {
            let html = renderer.render_structured(body, &images(&["http://x/1.jpg"]));
            assert!(!html.contains("<img"), "body: {}", body);
            assert!(html.starts_with("<!-- Image "));
        }
    }

    #[test]
    fn test_newline_counts() {
        let renderer = ContentRenderer::default();
        for k in [0usize, 1, 2, 5, 100] {
            let html = renderer.render_structured(&format!("前\n[NEWLINE:{}]\n後", k), &[]);
            assert_eq!(html, format!("前{}後", "<br>".repeat(k)));
        }
    }

    #[test]
    fn test_newline_count_over_limit_degrades() {
        let renderer = ContentRenderer::default();
        let html = renderer.render("前\n[NEWLINE:4611686018427387904]\n後", Group::Other);
        assert_eq!(html, "前\n[NEWLINE:4611686018427387904]\n後");

        let html = renderer.render_tokens(&[ContentToken::LineBreak(usize::MAX)], &[]);
        assert_eq!(html, "<br>".repeat(MAX_LINE_BREAKS));
    }

    #[test]
    fn test_image_token_url_escaped() {
        let html = ContentRenderer::default()
            .render("![a](https://x/a.jpg\" onerror=\"alert(1))\n[IMAGE:1]", Group::Other);
        assert!(!html.contains("onerror=\""));
        assert_eq!(
            html.matches(r#"src="https://x/a.jpg&quot; onerror=&quot;alert(1""#)
                .count(),
            2
        );
    }

    #[test]
    fn test_break_lines_through_render() {
        let renderer = ContentRenderer::default();
        assert_eq!(
            renderer.render("一行目\n<br>\n二行目", Group::Other),
            "一行目<br>二行目<br>"
        );
        assert_eq!(
            renderer.render("今日は\n晴れ\n<br>\n明日は\n雨", Group::Hinatazaka),
            "今日は晴れ<br><br>明日は雨"
        );
    }

    #[test]
    fn test_bold_url_linkified() {
        let html = ContentRenderer::default().render("**https://example.com/page**", Group::Other);
        assert!(html.starts_with(r#"<strong><a href="https://example.com/page""#));
    }

    #[test]
    fn test_text_lines_joined_by_newline() {
        let renderer = ContentRenderer::default();
        let html = renderer.render_structured("一\n二\n\n三\n[NEWLINE:1]\n四", &[]);
        assert_eq!(html, "一\n二三<br>四");
    }

    #[test]
    fn test_malformed_token_rendered_as_text() {
        let renderer = ContentRenderer::default();
        let html = renderer.render("[NEWLINE:abc]\n本文", Group::Other);
        assert_eq!(html, "[NEWLINE:abc]\n本文");
    }

    #[test]
    fn test_render_structured_full_body() {
        let raw = "---\ntitle: t\n---\n![a](https://x/1.jpg)\n今日は**晴れ**\n[NEWLINE:2]\n[IMAGE:1]\n[IMAGE:2]";
        let html = ContentRenderer::default().render(raw, Group::Nogizaka);
        assert!(!html.contains("title: t"));
        assert!(html.contains("<strong>晴れ</strong><br><br>"));
        // Inline Markdown image plus the token referring to it
        assert_eq!(html.matches(r#"src="https://x/1.jpg""#).count(), 2);
        assert!(html.ends_with("<!-- Image 2 placeholder -->"));
    }

    #[test]
    fn test_supplied_images_used_when_body_has_none() {
        let renderer = ContentRenderer::default();
        let supplied = images(&["https://cdn/a.png"]);
        let html = renderer.render_with_images("[IMAGE:1]", Group::Other, &supplied);
        assert!(html.contains(r#"src="https://cdn/a.png""#));

        let html = renderer.render_with_images(
            "![](https://x/own.jpg)\n[IMAGE:1]",
            Group::Other,
            &supplied,
        );
        assert!(!html.contains("https://cdn/a.png"));
    }

    #[test]
    fn test_legacy_default_strategy() {
        let html = ContentRenderer::default().render("![p](http://x/1.jpg)\n\n**Hi**", Group::Other);
        assert_eq!(html.matches("<img").count(), 1);
        assert!(html.contains(r#"src="http://x/1.jpg""#));
        assert!(html.contains("<strong>Hi</strong>"));
        assert!(!html.contains("<br><br>"));
        assert!(!html.contains("<p></p>"));
    }

    #[test]
    fn test_legacy_sentence_strategy_for_nogizaka() {
        let html = ContentRenderer::default().render("「こんにちは\n世界」\n次の文", Group::Nogizaka);
        assert_eq!(html, "「こんにちは世界」<br>次の文<br>");
    }

    #[test]
    fn test_legacy_paragraph_strategy_for_hinatazaka() {
        let html = ContentRenderer::default().render("今日は\n晴れ\n\n明日は\n雨", Group::Hinatazaka);
        assert_eq!(html, "今日は晴れ<br><br>明日は雨");
    }

    #[test]
    fn test_text_escaped_by_default() {
        let html = ContentRenderer::default().render("<script>x</script>\n**b**", Group::Other);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<strong>b</strong>"));

        let raw = ContentRenderer::new(RenderConfig {
            escape_text: false,
            ..Default::default()
        })
        .render("<b>x</b>", Group::Other);
        assert_eq!(raw, "<b>x</b><br>");
    }

    #[test]
    fn test_render_converted() {
        let html = ContentRenderer::default()
            .render_converted("![a](https://x/1.jpg)\n\n\n本文\n![b](https://x/2.jpg)");
        assert!(html.contains(r#"src="https://x/1.jpg""#));
        assert!(html.contains(r#"src="https://x/2.jpg""#));
        assert!(html.contains("<br><br>本文"));
    }
}
