//! Text layout shared by the SVG and raster renderers
//!
//! One log line becomes one row. Rows are measured in character columns; the
//! renderers turn columns and rows into pixels.

use crate::rules::{LineStyle, RuleSet};

/// Rows longer than this are cut off
pub const MAX_COLUMNS: usize = 240;

/// Tab stops every this many columns
pub const TAB_WIDTH: usize = 4;

/// A laid-out row of the microprint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Printable text, at most `MAX_COLUMNS` characters
    pub text: String,
    pub style: LineStyle,
}

/// Rows of a microprint and the width they need
#[derive(Debug, Clone)]
pub struct Layout {
    pub rows: Vec<Row>,
    /// Length of the longest row, at least 1
    pub columns: usize,
}

impl Layout {
    /// Lays out `text`, coloring each line with `rules`
    ///
    /// Rules see the whole line, so a keyword past the cut-off still colors
    /// the row. An empty text yields a single blank row.
    pub fn new(text: &str, rules: &RuleSet) -> Self {
        let mut rows: Vec<Row> = text
            .lines()
            .map(|line| {
                let printable = printable(line);
                let style = rules.style_for(&printable);
                Row {
                    text: printable.chars().take(MAX_COLUMNS).collect(),
                    style,
                }
            })
            .collect();

        if rows.is_empty() {
            rows.push(Row {
                text: String::new(),
                style: rules.default_style(),
            });
        }

        let columns = rows
            .iter()
            .map(|row| row.text.chars().count())
            .max()
            .unwrap_or(0)
            .max(1);

        Self { rows, columns }
    }
}

/// Expands tabs and drops control characters
fn printable(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;

    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else if !ch.is_control() {
            out.push(ch);
            column += 1;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{DEFAULT_STYLE, ERROR_STYLE};

    #[test]
    fn test_one_row_per_line() {
        let layout = Layout::new("build\nERROR: failed\r\nok\n", &RuleSet::default());

        let texts: Vec<_> = layout.rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["build", "ERROR: failed", "ok"]);
        assert_eq!(layout.rows[1].style, ERROR_STYLE);
        assert_eq!(layout.columns, "ERROR: failed".len());
    }

    #[test]
    fn test_empty_text_yields_blank_row() {
        let layout = Layout::new("", &RuleSet::default());
        assert_eq!(layout.rows.len(), 1);
        assert_eq!(layout.rows[0].style, DEFAULT_STYLE);
        assert_eq!(layout.columns, 1);
    }

    #[test]
    fn test_tabs_expand_to_stops() {
        assert_eq!(printable("a\tb"), "a   b");
        assert_eq!(printable("\tx"), "    x");
        assert_eq!(printable("abcd\te"), "abcd    e");
    }

    #[test]
    fn test_control_characters_are_dropped() {
        assert_eq!(printable("a\x1bb\x07c\x00"), "abc");
    }

    #[test]
    fn test_long_lines_are_truncated_but_still_classified() {
        let line = format!("{} error", "x".repeat(MAX_COLUMNS + 10));
        let layout = Layout::new(&line, &RuleSet::default());

        assert_eq!(layout.rows[0].text.chars().count(), MAX_COLUMNS);
        assert_eq!(layout.columns, MAX_COLUMNS);
        assert_eq!(layout.rows[0].style, ERROR_STYLE);
    }
}
