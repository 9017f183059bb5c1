//! Renderer configuration (render.yml / render.toml)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::StrategyKind;
use crate::group::Group;

/// Options controlling the generated markup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    // Images
    pub image_class: String,
    /// Alt text for Markdown images written as `![](url)`
    pub image_alt: String,

    // Links
    pub link_rel: String,
    pub link_style: Option<String>,

    // Layout
    pub line_break: String,
    /// HTML-escape body text before Markdown processing
    pub escape_text: bool,
    /// Strategy C never merges onto a run shorter than this (in chars)
    pub min_merge_chars: usize,

    /// Group key -> line-merge strategy
    #[serde(default)]
    pub strategies: HashMap<String, StrategyKind>,

    // Previews
    pub preview_length: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_class: "w-full my-4 rounded-lg".to_string(),
            image_alt: "图片".to_string(),

            link_rel: "noopener noreferrer".to_string(),
            link_style: None,

            line_break: "<br>".to_string(),
            escape_text: true,
            min_merge_chars: 10,

            strategies: HashMap::new(),

            preview_length: 200,
        }
    }
}

impl RenderConfig {
    /// Load configuration from a YAML or TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let config: RenderConfig = match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => serde_yaml::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => bail!("Unsupported config format: {:?}", other),
        };

        for key in config.strategies.keys() {
            if Group::resolve(key) == Group::Other && key != "other" {
                tracing::warn!("Unknown group in strategies: {}", key);
            }
        }

        tracing::debug!("Loaded render config from {:?}", path);
        Ok(config)
    }

    /// Line-merge strategy for a group: configured override, else built-in
    pub fn strategy_for(&self, group: Group) -> StrategyKind {
        self.strategies
            .iter()
            .find(|(key, _)| {
                let resolved = Group::resolve(key);
                resolved == group && (group != Group::Other || key.as_str() == "other")
            })
            .map(|(_, kind)| *kind)
            .unwrap_or_else(|| StrategyKind::default_for(group))
    }
}
