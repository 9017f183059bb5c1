//! Strategy A: one run per line

use super::{Layout, LineMergeStrategy};
use crate::helpers::{is_break_line, is_image_line};

/// Every text line is its own run followed by a soft break; blank lines
/// and bare `<br>` lines are dropped, image lines stand alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndependentLines;

impl LineMergeStrategy for IndependentLines {
    fn name(&self) -> &'static str {
        "independent"
    }

    fn merge(&self, html: &str, layout: &Layout<'_>) -> String {
        let mut out = String::with_capacity(html.len());

        for line in html.lines().map(str::trim) {
            if line.is_empty() || is_break_line(line) {
                continue;
            }
            out.push_str(line);
            if !is_image_line(line) {
                out.push_str(layout.line_break);
            }
        }

        out
    }
}
