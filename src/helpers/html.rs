//! HTML string builders shared by the rendering paths

/// Generate a lazily loaded image tag
///
/// # Examples
/// ```ignore
/// image_tag("https://x/1.jpg", "图片1", "w-full") // -> <img src="https://x/1.jpg" alt="图片1" class="w-full" loading="lazy" />
/// ```
pub fn image_tag(src: &str, alt: &str, class: &str) -> String {
    let class_attr = if class.is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, class)
    };

    format!(
        r#"<img src="{}" alt="{}"{} loading="lazy" />"#,
        src, alt, class_attr
    )
}

/// Generate an anchor that opens in a new tab, the URL doubling as its text
pub fn external_link(href: &str, rel: &str, style: Option<&str>) -> String {
    let style_attr = style
        .filter(|s| !s.is_empty())
        .map(|s| format!(r#" style="{}""#, s))
        .unwrap_or_default();

    format!(
        r#"<a href="{}" target="_blank" rel="{}"{}>{}</a>"#,
        href, rel, style_attr, href
    )
}

/// HTML comment standing in for an image that could not be resolved
pub fn image_placeholder(index: usize) -> String {
    format!("<!-- Image {} placeholder -->", index)
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Keep the first `length` characters, appending `omission` when cut
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(length).collect();
        format!("{}{}", truncated, omission)
    }
}

/// Collapse every whitespace run into one space
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether a line is nothing but a line-break tag, raw or HTML-escaped
pub fn is_break_line(line: &str) -> bool {
    matches!(
        line.trim(),
        "<br>" | "<br/>" | "<br />" | "&lt;br&gt;" | "&lt;br/&gt;" | "&lt;br /&gt;"
    )
}

/// Whether a line is a single standalone image tag
pub fn is_image_line(line: &str) -> bool {
    let line = line.trim();
    line.starts_with("<img") && line.ends_with('>') && line.matches('<').count() == 1
}
