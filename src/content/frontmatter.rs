//! Front-matter stripping and parsing

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const DELIMITER: &str = "---";

/// Metadata block found at the top of a translated body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub member: Option<String>,
    pub group: Option<String>,
    pub date: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// The body is stripped exactly as [`strip_frontmatter`] does; metadata
    /// that is not valid YAML is logged and dropped.
    pub fn parse(content: &str) -> (Option<Self>, &str) {
        let Some((block, body)) = split(content) else {
            return (None, content);
        };

        if block.trim().is_empty() {
            return (None, body);
        }

        match serde_yaml::from_str::<FrontMatter>(block) {
            Ok(fm) => (Some(fm), body),
            Err(e) => {
                tracing::warn!("Failed to parse front-matter metadata: {}", e);
                (None, body)
            }
        }
    }
}

/// Remove a leading `---`-delimited block
///
/// Without a closing delimiter the input comes back untouched, so a body
/// that merely opens with a horizontal rule is never cut.
pub fn strip_frontmatter(content: &str) -> &str {
    split(content).map(|(_, body)| body).unwrap_or(content)
}

/// Split into (metadata block, trimmed body)
fn split(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix(DELIMITER)?;
    let end = rest.find(DELIMITER)?;
    let block = &rest[..end];
    let body = rest[end + DELIMITER.len()..].trim();
    Some((block, body))
}
