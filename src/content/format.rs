//! Body format detection

use serde::Serialize;
use std::fmt;

pub(crate) const NEWLINE_TOKEN_PREFIX: &str = "[NEWLINE:";
pub(crate) const IMAGE_TOKEN_PREFIX: &str = "[IMAGE:";

/// Shape of a translated blog body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    /// Carries `[NEWLINE:n]` / `[IMAGE:n]` tokens from the translation backend
    Structured,
    /// Older bodies written in a Markdown subset
    Markdown,
    /// Plain text
    Unknown,
}

impl ContentFormat {
    /// Classify a body. Structured tokens win over Markdown markers.
    pub fn detect(text: &str) -> Self {
        if has_structured_tokens(text) {
            ContentFormat::Structured
        } else if text.contains("![") || text.contains("**") || text.contains("##") {
            ContentFormat::Markdown
        } else {
            ContentFormat::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentFormat::Structured => "structured",
            ContentFormat::Markdown => "markdown",
            ContentFormat::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the body contains a structured token opener
pub fn has_structured_tokens(text: &str) -> bool {
    text.contains(NEWLINE_TOKEN_PREFIX) || text.contains(IMAGE_TOKEN_PREFIX)
}

/// Classify a body
pub fn detect_format(text: &str) -> ContentFormat {
    ContentFormat::detect(text)
}
