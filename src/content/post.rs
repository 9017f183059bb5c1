//! Blog post records as returned by the blog API

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::preview::content_preview;
use super::renderer::ContentRenderer;
use crate::group::Group;

/// Shown in place of a body that has not been translated yet
pub const NO_CONTENT_HTML: &str = r#"<p style="color: #999;">暂无内容</p>"#;

/// Errors raised while ingesting API records
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Invalid blog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Blog response reported failure")]
    Unsuccessful,
}

/// `translated_content` is either the text itself or `{ "translatedText": ... }`
fn string_or_translation<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, MapAccess, Visitor};
    use std::fmt;

    struct StringOrTranslation;

    impl<'de> Visitor<'de> for StringOrTranslation {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or an object with translatedText")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut text = None;
            while let Some(key) = map.next_key::<String>()? {
                if key == "translatedText" {
                    text = map.next_value::<Option<String>>()?;
                } else {
                    map.next_value::<de::IgnoredAny>()?;
                }
            }
            Ok(text)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(StringOrTranslation)
}

/// A translated blog post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    /// Numeric or string id, kept as the API sent it
    pub id: Option<serde_json::Value>,
    pub title: Option<String>,
    pub member: Option<String>,
    /// Resolved once here; rendering only sees the enum
    pub group: Group,
    pub publish_date: Option<String>,
    #[serde(deserialize_with = "string_or_translation")]
    pub translated_content: Option<String>,
}

/// `{ "success": true, "blogs": [...] }`
#[derive(Debug, Deserialize)]
struct BlogListResponse {
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    blogs: Vec<BlogPost>,
}

fn default_success() -> bool {
    true
}

impl BlogPost {
    /// Parse a single post record
    pub fn from_json(json: &str) -> Result<Self, IngestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a list: either a bare array or the API's `blogs` envelope
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, IngestError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.is_array() {
            return Ok(serde_json::from_value(value)?);
        }

        let response: BlogListResponse = serde_json::from_value(value)?;
        if !response.success {
            return Err(IngestError::Unsuccessful);
        }
        Ok(response.blogs)
    }

    /// Title for display
    pub fn display_title(&self) -> &str {
        self.title.as_deref().filter(|t| !t.is_empty()).unwrap_or("无标题")
    }

    /// Render the translated body
    pub fn render(&self, renderer: &ContentRenderer) -> String {
        match self.translated_content.as_deref() {
            Some(body) if !body.trim().is_empty() => renderer.render(body, self.group),
            _ => NO_CONTENT_HTML.to_string(),
        }
    }

    /// Plain-text excerpt of the translated body
    pub fn preview(&self, max_chars: usize) -> String {
        content_preview(self.translated_content.as_deref().unwrap_or(""), max_chars)
    }

    /// Parse `publish_date`
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        self.publish_date.as_deref().and_then(parse_date_string)
    }
}

/// Parse a date string in the formats the API emits
fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y.%m.%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y.%m.%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 with offset, e.g. 2025-10-19T08:00:00+09:00
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_local())
}
