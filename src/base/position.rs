use std::fmt;

use text_size::TextSize;

/// A position in source text (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Resolve a byte offset to its 0-indexed line/column.
    ///
    /// Columns count characters, not bytes. Identifiers and numbers are
    /// ASCII by construction, so the distinction only shows up when a
    /// comment carries multi-byte characters.
    pub fn of(text: &str, offset: TextSize) -> Self {
        let offset = usize::from(offset).min(text.len());
        let mut line = 0;
        let mut line_start = 0;
        for (i, byte) in text.bytes().enumerate().take(offset) {
            if byte == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }
        let column = text
            .get(line_start..offset)
            .map(|s| s.chars().count())
            .unwrap_or(offset - line_start);
        Self { line, column }
    }
}

/// A byte offset paired with its resolved line/column.
///
/// Parse errors carry one of these so callers get both machine-usable
/// offsets and human-readable positions from the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub offset: TextSize,
    pub position: Position,
}

impl SourceLocation {
    pub fn of(text: &str, offset: TextSize) -> Self {
        Self {
            offset,
            position: Position::of(text, offset),
        }
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }
}

impl fmt::Display for SourceLocation {
    /// Displays as 1-based `line:column`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.position.line + 1, self.position.column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_of_start() {
        assert_eq!(Position::of("abc", TextSize::new(0)), Position::new(0, 0));
    }

    #[test]
    fn position_of_tracks_lines_and_columns() {
        let text = "max x\n  c1: x <= 2\n";
        assert_eq!(Position::of(text, TextSize::new(4)), Position::new(0, 4));
        assert_eq!(Position::of(text, TextSize::new(8)), Position::new(1, 2));
    }

    #[test]
    fn position_of_counts_chars_not_bytes() {
        let text = "\\ caf\u{e9} note\nx";
        let offset = TextSize::new(text.len() as u32 - 1);
        assert_eq!(Position::of(text, offset), Position::new(1, 0));
    }

    #[test]
    fn location_displays_one_based() {
        let loc = SourceLocation::of("a\nbc", TextSize::new(3));
        assert_eq!(loc.to_string(), "2:2");
        assert_eq!(loc.line(), 1);
        assert_eq!(loc.column(), 1);
    }
}
