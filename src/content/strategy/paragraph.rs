//! Strategy B: paragraphs separated by blank lines

use super::{Layout, LineMergeStrategy};
use crate::helpers::{is_break_line, is_image_line};

/// Consecutive lines join into one paragraph run; a blank line or `<br>`
/// closes it. Paragraphs are separated by a double break, none at the end.
/// Images close the open paragraph and stand alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphBlocks;

impl LineMergeStrategy for ParagraphBlocks {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn merge(&self, html: &str, layout: &Layout<'_>) -> String {
        let mut out = String::with_capacity(html.len());
        let mut paragraph = String::new();
        // A closed paragraph gets its double break only once something follows
        let mut closed = false;

        for line in html.lines().map(str::trim) {
            if line.is_empty() || is_break_line(line) {
                if !paragraph.is_empty() {
                    emit(&mut out, &paragraph, closed, layout);
                    paragraph.clear();
                    closed = true;
                }
            } else if is_image_line(line) {
                if !paragraph.is_empty() {
                    emit(&mut out, &paragraph, closed, layout);
                    paragraph.clear();
                    closed = true;
                }
                emit(&mut out, line, closed, layout);
                closed = false;
            } else {
                paragraph.push_str(line);
            }
        }

        if !paragraph.is_empty() {
            emit(&mut out, &paragraph, closed, layout);
        }
        out
    }
}

fn emit(out: &mut String, piece: &str, after_paragraph: bool, layout: &Layout<'_>) {
    if after_paragraph {
        out.push_str(layout.line_break);
        out.push_str(layout.line_break);
    }
    out.push_str(piece);
}
