//! Group-specific line merging for bodies without structured tokens
//!
//! Legacy bodies lost their original layout in translation. Each group's
//! blogs break lines differently, so each gets its own heuristic for
//! deciding which lines belong together.

mod independent;
mod paragraph;
mod sentence;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::group::Group;

pub use independent::IndependentLines;
pub use paragraph::ParagraphBlocks;
pub use sentence::SentenceMerge;

/// Layout settings shared by all strategies
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    /// Markup for one soft line break
    pub line_break: &'a str,
    /// Sentence merging never extends a run shorter than this
    pub min_merge_chars: usize,
}

impl Default for Layout<'static> {
    fn default() -> Self {
        Self {
            line_break: "<br>",
            min_merge_chars: 10,
        }
    }
}

/// Turns an inline-processed body into laid-out HTML
pub trait LineMergeStrategy: Sync {
    fn name(&self) -> &'static str;

    fn merge(&self, html: &str, layout: &Layout<'_>) -> String;
}

/// The closed set of strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// A: every line stands alone
    #[serde(rename = "independent")]
    Independent,
    /// B: blank lines separate paragraphs
    #[serde(rename = "paragraph")]
    Paragraph,
    /// C: punctuation decides where sentences end
    #[serde(rename = "sentence")]
    SentenceMerge,
}

static INDEPENDENT: IndependentLines = IndependentLines;
static PARAGRAPH: ParagraphBlocks = ParagraphBlocks;
static SENTENCE: SentenceMerge = SentenceMerge;

impl StrategyKind {
    /// Built-in assignment when the config has no override
    pub fn default_for(group: Group) -> Self {
        match group {
            Group::Nogizaka => StrategyKind::SentenceMerge,
            Group::Hinatazaka => StrategyKind::Paragraph,
            Group::Sakurazaka | Group::Other => StrategyKind::Independent,
        }
    }

    pub fn strategy(&self) -> &'static dyn LineMergeStrategy {
        match self {
            StrategyKind::Independent => &INDEPENDENT,
            StrategyKind::Paragraph => &PARAGRAPH,
            StrategyKind::SentenceMerge => &SENTENCE,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.strategy().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_assignment() {
        assert_eq!(StrategyKind::default_for(Group::Other), StrategyKind::Independent);
        assert_eq!(
            StrategyKind::default_for(Group::Sakurazaka),
            StrategyKind::Independent
        );
        assert_eq!(
            StrategyKind::default_for(Group::Hinatazaka),
            StrategyKind::Paragraph
        );
        assert_eq!(
            StrategyKind::default_for(Group::Nogizaka),
            StrategyKind::SentenceMerge
        );
    }

    #[test]
    fn test_registry_names() {
        assert_eq!(StrategyKind::Independent.to_string(), "independent");
        assert_eq!(StrategyKind::Paragraph.to_string(), "paragraph");
        assert_eq!(StrategyKind::SentenceMerge.to_string(), "sentence");
    }

    #[test]
    fn test_deserialize_kind() {
        let kind: StrategyKind = serde_yaml::from_str("sentence").unwrap();
        assert_eq!(kind, StrategyKind::SentenceMerge);
        assert!(serde_yaml::from_str::<StrategyKind>("fancy").is_err());
    }
}
