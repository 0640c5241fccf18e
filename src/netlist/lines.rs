//! Line preprocessing for netlist text.
//!
//! Comment lines (starting with `//` after leading whitespace) and blank
//! lines are blanked out rather than dropped, so positions in the result
//! still match physical line numbers.

use crate::COMMENT_PREFIX;

/// A non-blank line of netlist text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceLine<'a> {
    /// Line number (1-indexed)
    pub number: usize,
    /// Line content with leading whitespace removed
    pub text: &'a str,
}

impl<'a> SourceLine<'a> {
    /// Whitespace-separated tokens.
    pub fn tokens(&self) -> Vec<&'a str> {
        self.text.split_whitespace().collect()
    }
}

/// Strip leading whitespace from every line and blank out comments.
pub fn preprocess(input: &str) -> Vec<&str> {
    input
        .lines()
        .map(|line| {
            let line = line.trim_start();
            if line.starts_with(COMMENT_PREFIX) || line.trim_end().is_empty() {
                ""
            } else {
                line
            }
        })
        .collect()
}

/// Iterate over the non-blank lines, keeping their physical line numbers.
pub fn content_lines(input: &str) -> impl Iterator<Item = SourceLine<'_>> {
    preprocess(input)
        .into_iter()
        .enumerate()
        .filter(|(_, text)| !text.is_empty())
        .map(|(i, text)| SourceLine { number: i + 1, text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_keeps_line_positions() {
        let input = "// header\n  A B\n\n\t// indented comment\nR 10 A B\n   \n";
        let lines = preprocess(input);
        assert_eq!(lines, vec!["", "A B", "", "", "R 10 A B", ""]);
    }

    #[test]
    fn test_content_lines_numbering() {
        let input = "// header\nA B\n\nR 10 A B";
        let lines: Vec<_> = content_lines(input).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].number, 2);
        assert_eq!(lines[1].number, 4);
        assert_eq!(lines[1].tokens(), vec!["R", "10", "A", "B"]);
    }

    #[test]
    fn test_tokens_split_on_any_whitespace() {
        let line = SourceLine {
            number: 1,
            text: "I\t1m   A  GND\r",
        };
        assert_eq!(line.tokens(), vec!["I", "1m", "A", "GND"]);
    }
}
