//! Content module - turns translated blog bodies into HTML
//!
//! The pipeline: strip front-matter, detect the body format, then either
//! interpret structured `[NEWLINE:n]`/`[IMAGE:n]` tokens or run the legacy
//! Markdown path with a group-specific line-merge strategy.

mod convert;
mod format;
mod frontmatter;
mod images;
mod inline;
mod post;
mod preview;
mod renderer;
pub mod strategy;
mod token;

pub use convert::convert_to_structured;
pub use format::{detect_format, has_structured_tokens, ContentFormat};
pub use frontmatter::{strip_frontmatter, FrontMatter};
pub use images::extract_image_urls;
pub use inline::InlineProcessor;
pub use post::{BlogPost, IngestError, NO_CONTENT_HTML};
pub use preview::{content_preview, EMPTY_PREVIEW};
pub use renderer::ContentRenderer;
pub use strategy::{LineMergeStrategy, StrategyKind};
pub use token::{tokenize_structured, ContentToken};
