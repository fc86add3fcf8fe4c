//! Position - Cursor location in a named source buffer
//!
//! A Position is the lexer's live cursor. It is mutated in place while
//! scanning and cloned whenever a location has to be frozen for a
//! diagnostic.

use std::fmt;
use std::sync::Arc;

/// A cursor into a source buffer
///
/// `index` is the character offset of the next character to read (or the
/// length of the text once exhausted). `line` and `column` are zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Character offset of the next character to read
    pub index: usize,
    /// Line (0-indexed)
    pub line: usize,
    /// Column (0-indexed)
    pub column: usize,
    filename: Arc<str>,
    source: Arc<str>,
}

impl Position {
    pub fn new(
        index: usize,
        line: usize,
        column: usize,
        filename: impl Into<Arc<str>>,
        source: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            index,
            line,
            column,
            filename: filename.into(),
            source: source.into(),
        }
    }

    /// Creates a cursor sitting on the first character of `source`
    pub fn start(filename: impl Into<Arc<str>>, source: impl Into<Arc<str>>) -> Self {
        Self::new(0, 0, 0, filename, source)
    }

    /// Moves the cursor past `current_char`, the character it sits on.
    ///
    /// A newline bumps the line and resets the column. `index` keeps
    /// counting across lines.
    pub fn advance(&mut self, current_char: Option<char>) -> &mut Self {
        self.index += 1;
        self.column += 1;

        if current_char == Some('\n') {
            self.line += 1;
            self.column = 0;
        }

        self
    }

    /// Freezes the current location
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// One-based line, as shown to users
    pub fn line_number(&self) -> usize {
        self.line + 1
    }

    /// Returns the text of the line this position is on, without its terminator
    pub fn line_text(&self) -> Option<&str> {
        self.source.split('\n').nth(self.line)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line_number(), self.column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_column_and_index() {
        let mut pos = Position::start("test", "12");
        pos.advance(Some('1'));

        assert_eq!(pos.index, 1);
        assert_eq!(pos.line, 0);
        assert_eq!(pos.column, 1);
    }

    #[test]
    fn test_newline_bumps_line_and_keeps_index() {
        let mut pos = Position::start("test", "1\n2");
        pos.advance(Some('1')).advance(Some('\n'));

        assert_eq!(pos.index, 2);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 0);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut pos = Position::start("test", "1+2");
        let frozen = pos.snapshot();
        pos.advance(Some('1'));

        assert_eq!(frozen.index, 0);
        assert_eq!(pos.index, 1);
        assert_eq!(frozen.filename(), "test");
    }

    #[test]
    fn test_line_text() {
        let mut pos = Position::start("test", "1+2\n3*4");
        for ch in "1+2\n".chars() {
            pos.advance(Some(ch));
        }

        assert_eq!(pos.line_text(), Some("3*4"));
        assert_eq!(pos.to_string(), "test:2:1");
    }
}
