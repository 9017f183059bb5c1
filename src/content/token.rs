//! Content tokens of the structured body format

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref NEWLINE_LINE: Regex = Regex::new(r"^\[NEWLINE:(\d+)\]$").unwrap();
    static ref IMAGE_LINE: Regex = Regex::new(r"^\[IMAGE:(\d+)\]$").unwrap();
}

/// Largest `[NEWLINE:n]` count honored; bigger counts stay literal text
pub const MAX_LINE_BREAKS: usize = 1000;

/// One instruction of a structured body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentToken {
    /// Unprocessed text
    TextRun(String),
    /// `[NEWLINE:n]`
    LineBreak(usize),
    /// `[IMAGE:n]`, 1-based
    ImagePlaceholder(usize),
}

impl ContentToken {
    /// Parse a whole trimmed line as a token
    ///
    /// Anything that is not exactly `[NEWLINE:<digits>]` or `[IMAGE:<digits>]`
    /// (including line-break counts above [`MAX_LINE_BREAKS`]) is plain text.
    pub fn parse_line(line: &str) -> Self {
        if let Some(count) = capture_number(&NEWLINE_LINE, line) {
            if count <= MAX_LINE_BREAKS {
                return ContentToken::LineBreak(count);
            }
            tracing::debug!("Line-break count {} over limit, kept as text", count);
        }
        if let Some(index) = capture_number(&IMAGE_LINE, line) {
            return ContentToken::ImagePlaceholder(index);
        }
        ContentToken::TextRun(line.to_string())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ContentToken::TextRun(_))
    }
}

/// Serializes back to the marker form
impl fmt::Display for ContentToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentToken::TextRun(text) => f.write_str(text),
            ContentToken::LineBreak(count) => write!(f, "[NEWLINE:{}]", count),
            ContentToken::ImagePlaceholder(index) => write!(f, "[IMAGE:{}]", index),
        }
    }
}

fn capture_number(re: &Regex, line: &str) -> Option<usize> {
    re.captures(line)?.get(1)?.as_str().parse().ok()
}

/// Tokenize a structured body line by line
///
/// Blank lines carry no meaning and are dropped. Two consecutive text lines
/// are separated by a `TextRun("\n")`; a blank line between them suppresses
/// the separator.
pub fn tokenize_structured(body: &str) -> Vec<ContentToken> {
    let lines: Vec<&str> = body.lines().map(str::trim).collect();
    let mut tokens = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }

        let token = ContentToken::parse_line(line);
        let is_text = token.is_text();
        tokens.push(token);

        if is_text {
            // A malformed token on the next line is text too, so it gets a separator
            let next_is_text = lines
                .get(i + 1)
                .is_some_and(|next| !next.is_empty() && ContentToken::parse_line(next).is_text());
            if next_is_text {
                tokens.push(ContentToken::TextRun("\n".to_string()));
            }
        }
    }

    tokens
}
