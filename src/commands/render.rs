//! Render a single body or blog record

use anyhow::Result;
use std::path::Path;

use super::read_input;
use crate::content::{BlogPost, ContentRenderer};
use crate::group::Group;

/// Render `path` to HTML
///
/// With `json`, the input is a blog record and its own group wins over
/// `group`.
pub fn run(
    renderer: &ContentRenderer,
    path: &Path,
    group: Group,
    images: &[String],
    json: bool,
) -> Result<String> {
    let input = read_input(path)?;

    if json {
        let mut post = BlogPost::from_json(&input)?;
        if post.group == Group::Other {
            post.group = group;
        }
        tracing::info!("Rendering \"{}\" ({})", post.display_title(), post.group);
        return Ok(post.render(renderer));
    }

    Ok(renderer.render_with_images(&input, group, images))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_render_body_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "本文\n[NEWLINE:1]\n[IMAGE:1]").unwrap();

        let html = run(
            &ContentRenderer::default(),
            file.path(),
            Group::Other,
            &["https://x/1.jpg".to_string()],
            false,
        )
        .unwrap();
        assert!(html.starts_with("本文<br><img"));
    }

    #[test]
    fn test_render_json_record() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"title": "t", "translated_content": "今日は\n晴れ\n\n雨"}}"#
        )
        .unwrap();

        let html = run(
            &ContentRenderer::default(),
            file.path(),
            Group::Hinatazaka,
            &[],
            true,
        )
        .unwrap();
        assert_eq!(html, "今日は晴れ<br><br>雨");
    }

    #[test]
    fn test_missing_file() {
        let result = run(
            &ContentRenderer::default(),
            Path::new("/nonexistent/body.md"),
            Group::Other,
            &[],
            false,
        );
        assert!(result.is_err());
    }
}
