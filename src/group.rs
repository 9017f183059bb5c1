//! Idol group identity
//!
//! Blog records carry the group as a display string (`乃木坂46`, `櫻坂46`,
//! `hinatazaka`...). It is resolved to [`Group`] once at ingestion and
//! never re-parsed while rendering.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One of the three Sakamichi groups, or anything else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Group {
    Nogizaka,
    Sakurazaka,
    Hinatazaka,
    #[default]
    Other,
}

/// Fallback color for unknown groups
const DEFAULT_COLOR: &str = "#6b7280";

impl Group {
    pub const ALL: [Group; 3] = [Group::Nogizaka, Group::Sakurazaka, Group::Hinatazaka];

    /// Stable lowercase key, as used in routes and config files
    pub fn key(&self) -> &'static str {
        match self {
            Group::Nogizaka => "nogizaka",
            Group::Sakurazaka => "sakurazaka",
            Group::Hinatazaka => "hinatazaka",
            Group::Other => "other",
        }
    }

    /// Name shown to readers
    pub fn display_name(&self) -> &'static str {
        match self {
            Group::Nogizaka => "乃木坂46",
            Group::Sakurazaka => "樱坂46",
            Group::Hinatazaka => "日向坂46",
            Group::Other => "",
        }
    }

    /// Name the blog API expects in queries
    pub fn api_name(&self) -> &'static str {
        // The API uses the simplified form for Sakurazaka, same as display
        self.display_name()
    }

    pub fn color(&self) -> &'static str {
        match self {
            Group::Nogizaka => "#a855f7",
            Group::Sakurazaka => "#f59e0b",
            Group::Hinatazaka => "#3b82f6",
            Group::Other => DEFAULT_COLOR,
        }
    }

    /// Official site of the group
    pub fn base_url(&self) -> Option<&'static str> {
        match self {
            Group::Nogizaka => Some("https://www.nogizaka46.com"),
            Group::Sakurazaka => Some("https://sakurazaka46.com"),
            Group::Hinatazaka => Some("https://www.hinatazaka46.com"),
            Group::Other => None,
        }
    }

    /// Resolve a key, display name or free-form label
    ///
    /// Matching is by key first, then by the group-name stem anywhere in the
    /// label, so `乃木坂46 公式ブログ` still resolves. Unknown labels map to
    /// [`Group::Other`].
    pub fn resolve(label: &str) -> Self {
        let normalized = normalize_name(label);
        if normalized.is_empty() {
            return Group::Other;
        }

        let lower = normalized.to_lowercase();
        for group in Self::ALL {
            if lower == group.key() {
                return group;
            }
        }

        let stems: [(&str, &str, Group); 3] = [
            ("乃木坂", "nogizaka", Group::Nogizaka),
            ("樱坂", "sakurazaka", Group::Sakurazaka),
            ("日向坂", "hinatazaka", Group::Hinatazaka),
        ];
        for (stem, romaji, group) in stems {
            if normalized.contains(stem) || lower.contains(romaji) {
                return group;
            }
        }

        Group::Other
    }
}

/// Fold traditional characters into the simplified forms the API uses
pub fn normalize_name(name: &str) -> String {
    name.replace('櫻', "樱").trim().to_string()
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for Group {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Group {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.as_deref().map(Group::resolve).unwrap_or_default())
    }
}
