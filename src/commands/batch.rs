//! Render a directory of bodies

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::content::ContentRenderer;
use crate::group::Group;

/// Render every `.md`/`.txt` file under `input_dir` into `output_dir`
///
/// The directory layout is mirrored and each file gets an `.html`
/// extension. A file that cannot be read is logged and skipped. Returns
/// the number of files written.
pub fn run(
    renderer: &ContentRenderer,
    input_dir: &Path,
    output_dir: &Path,
    group: Group,
) -> Result<usize> {
    let start = std::time::Instant::now();
    let mut rendered = 0;

    for entry in WalkDir::new(input_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || !is_body_file(path) {
            continue;
        }

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to read {:?}: {}", path, e);
                continue;
            }
        };

        let relative = path.strip_prefix(input_dir).unwrap_or(path);
        let target = output_dir.join(relative).with_extension("html");
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        let html = renderer.render(&raw, group);
        fs::write(&target, html).with_context(|| format!("Failed to write {:?}", target))?;
        tracing::debug!("Rendered {:?} -> {:?}", path, target);
        rendered += 1;
    }

    tracing::info!("Rendered {} files in {:?}", rendered, start.elapsed());
    Ok(rendered)
}

fn is_body_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("md") | Some("markdown") | Some("txt")
    )
}
