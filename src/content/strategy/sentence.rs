//! Strategy C: merge lines until a sentence ends
//!
//! Translated bodies from this group wrap mid-sentence. A line is glued
//! onto the previous run unless punctuation says the run is complete.
//! The glyph sets and the short-run threshold are empirical.

use super::{Layout, LineMergeStrategy};
use crate::helpers::{is_break_line, is_image_line};

const OPEN_QUOTE: char = '「';
const CLOSE_QUOTE: char = '」';

/// A run ending in one of these is complete
const TERMINALS: &[char] = &[
    '。', '．', '.', '！', '!', '？', '?', '」', '』', '）', ')', '】', '〕', '〉', '》', '”',
    '"',
];

/// A line starting with one of these begins a new run
const OPENERS: &[char] = &['「', '『', '（', '(', '【', '〔', '〈', '《', '“', '"'];

const LIST_MARKERS: &[char] = &[
    '・', '●', '○', '■', '□', '◆', '◇', '★', '☆', '※', '♪', '-',
];

/// Escaped form of `"` when body text is HTML-escaped
const ESCAPED_QUOTE: &str = "&quot;";

#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceMerge;

enum Piece {
    Run(String),
    Image(String),
}

impl LineMergeStrategy for SentenceMerge {
    fn name(&self) -> &'static str {
        "sentence"
    }

    fn merge(&self, html: &str, layout: &Layout<'_>) -> String {
        let lines: Vec<&str> = html.lines().map(str::trim).collect();
        let mut pieces: Vec<Piece> = Vec::new();
        // Blank lines are hard boundaries: nothing merges across them
        let mut boundary = true;
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];
            i += 1;

            if line.is_empty() || is_break_line(line) {
                boundary = true;
                continue;
            }

            if is_image_line(line) {
                pieces.push(Piece::Image(line.to_string()));
                boundary = true;
                continue;
            }

            if line.starts_with(OPEN_QUOTE) && !line.contains(CLOSE_QUOTE) {
                let mut quoted = line.to_string();
                while i < lines.len() {
                    let next = lines[i];
                    if is_image_line(next) {
                        break;
                    }
                    i += 1;
                    if next.is_empty() || is_break_line(next) {
                        continue;
                    }
                    quoted.push_str(next);
                    if next.contains(CLOSE_QUOTE) {
                        break;
                    }
                }
                pieces.push(Piece::Run(quoted));
                boundary = false;
                continue;
            }

            match pieces.last_mut() {
                Some(Piece::Run(prev))
                    if !boundary && should_merge(prev.as_str(), line, layout.min_merge_chars) =>
                {
                    prev.push_str(line);
                }
                _ => pieces.push(Piece::Run(line.to_string())),
            }
            boundary = false;
        }

        let mut out = String::with_capacity(html.len());
        for piece in pieces {
            match piece {
                Piece::Run(run) => {
                    out.push_str(&run);
                    out.push_str(layout.line_break);
                }
                Piece::Image(img) => out.push_str(&img),
            }
        }
        out
    }
}

/// Whether `line` continues the sentence in `prev`
fn should_merge(prev: &str, line: &str, min_chars: usize) -> bool {
    if prev.chars().count() < min_chars {
        return false;
    }

    let prev_complete = prev.ends_with(TERMINALS) || prev.ends_with(ESCAPED_QUOTE);
    if prev_complete {
        return false;
    }

    let starts_new = line.starts_with(OPENERS)
        || line.starts_with(LIST_MARKERS)
        || line.starts_with(ESCAPED_QUOTE);
    !starts_new
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout<'static> {
        Layout {
            line_break: "<br>",
            min_merge_chars: 4,
        }
    }

    #[test]
    fn test_open_quote_spans_lines() {
        let html = SentenceMerge.merge("「こんにちは\n世界」\n次の文", &Layout::default());
        assert_eq!(html, "「こんにちは世界」<br>次の文<br>");
    }

    #[test]
    fn test_unclosed_quote_takes_rest() {
        let html = SentenceMerge.merge("「ずっと\n続く\n\nまま", &layout());
        assert_eq!(html, "「ずっと続くまま<br>");
    }

    #[test]
    fn test_merge_until_terminal() {
        let html = SentenceMerge.merge("今日はとても楽しい\n一日でした。\n明日も頑張ります", &layout());
        assert_eq!(html, "今日はとても楽しい一日でした。<br>明日も頑張ります<br>");
    }

    #[test]
    fn test_short_run_not_extended() {
        let html = SentenceMerge.merge("タイトル\nこれは本文の一行目", &Layout::default());
        assert_eq!(html, "タイトル<br>これは本文の一行目<br>");
    }

    #[test]
    fn test_opener_and_list_marker_start_new_run() {
        let html = SentenceMerge.merge("今日の予定について\n・朝ごはん\n（写真あり）", &layout());
        assert_eq!(html, "今日の予定について<br>・朝ごはん<br>（写真あり）<br>");
    }

    #[test]
    fn test_blank_line_is_boundary() {
        let html = SentenceMerge.merge("今日はとても楽しい\n\n一日でした", &layout());
        assert_eq!(html, "今日はとても楽しい<br>一日でした<br>");
    }

    #[test]
    fn test_image_stands_alone() {
        let html = SentenceMerge.merge(
            "今日はとても楽しい\n<img src=\"a.jpg\" />\n一日でした",
            &layout(),
        );
        assert_eq!(html, "今日はとても楽しい<br><img src=\"a.jpg\" />一日でした<br>");
    }

    #[test]
    fn test_should_merge_escaped_quote() {
        assert!(!should_merge("he said &quot;hi&quot;", "next", 1));
        assert!(should_merge("and then", "we left", 1));
    }
}
