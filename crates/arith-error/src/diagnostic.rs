//! Diagnostic - Position-anchored error reports
//!
//! A diagnostic carries the category of the failure, a short detail string
//! and frozen start/end positions. Its `Display` is the plain two-line
//! report; `DiagnosticRenderer` adds a source snippet with a caret underline.

use crate::position::Position;
use std::fmt;

/// Category of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Character outside the recognized set
    IllegalCharacter,
    /// Malformed numeric literal (`7.`) or integer overflow
    InvalidNumber,
    /// A number or `(` was required but something else was found
    UnexpectedToken,
    /// Tokens remain after a complete expression
    TrailingTokens,
}

impl ErrorKind {
    /// Human-readable category shown as the first word of a report
    pub fn category(&self) -> &'static str {
        match self {
            ErrorKind::IllegalCharacter => "Illegal Characters Error",
            ErrorKind::InvalidNumber => "Invalid Number Error",
            ErrorKind::UnexpectedToken => "Unexpected Token Error",
            ErrorKind::TrailingTokens => "Trailing Tokens Error",
        }
    }

    /// Stable short code (L = Lexer, P = Parser)
    pub fn code(&self) -> ErrorCode {
        match self {
            ErrorKind::IllegalCharacter => ErrorCode::ILLEGAL_CHAR,
            ErrorKind::InvalidNumber => ErrorCode::INVALID_NUMBER,
            ErrorKind::UnexpectedToken => ErrorCode::UNEXPECTED_TOKEN,
            ErrorKind::TrailingTokens => ErrorCode::TRAILING_TOKENS,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category())
    }
}

/// Structured error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    /// Phase (L = Lexer, P = Parser)
    pub category: char,
    /// Error number
    pub number: u16,
}

impl ErrorCode {
    pub const fn new(category: char, number: u16) -> Self {
        Self { category, number }
    }

    // Lexer errors
    pub const ILLEGAL_CHAR: Self = Self::new('L', 1);
    pub const INVALID_NUMBER: Self = Self::new('L', 2);

    // Parser errors
    pub const UNEXPECTED_TOKEN: Self = Self::new('P', 1);
    pub const TRAILING_TOKENS: Self = Self::new('P', 2);
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}{:03}", self.category, self.number)
    }
}

/// A single error report
///
/// `start` and `end` are snapshots taken when the fault was detected, so
/// they never follow the lexer's cursor afterwards.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error(
    "{category}:{detail}\nFile {file}, line {line}",
    category = .kind.category(),
    file = .start.filename(),
    line = .start.line_number()
)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub start: Position,
    pub end: Position,
    pub detail: String,
}

impl Diagnostic {
    pub fn new(kind: ErrorKind, start: Position, end: Position, detail: impl Into<String>) -> Self {
        Self {
            kind,
            start,
            end,
            detail: detail.into(),
        }
    }

    pub fn illegal_character(start: Position, end: Position, ch: char) -> Self {
        Self::new(ErrorKind::IllegalCharacter, start, end, format!("'{}'", ch))
    }

    pub fn invalid_number(start: Position, end: Position, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidNumber, start, end, detail)
    }

    pub fn unexpected_token(start: Position, end: Position, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnexpectedToken, start, end, detail)
    }

    pub fn trailing_tokens(start: Position, end: Position, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::TrailingTokens, start, end, detail)
    }

    /// Short label of the failure
    pub fn category(&self) -> &'static str {
        self.kind.category()
    }
}

/// Renders a diagnostic for a terminal
pub struct DiagnosticRenderer {
    use_colors: bool,
}

impl Default for DiagnosticRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticRenderer {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Renders the two-line report followed by the offending source line
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();

        let reset = if self.use_colors { "\x1b[0m" } else { "" };
        let red = if self.use_colors { "\x1b[1;31m" } else { "" };
        let blue = if self.use_colors { "\x1b[1;34m" } else { "" };

        // Line 1: category:detail
        output.push_str(red);
        output.push_str(diagnostic.category());
        output.push_str(reset);
        output.push(':');
        output.push_str(&diagnostic.detail);
        output.push('\n');

        // Line 2: File name, line N
        output.push_str(&format!(
            "File {}, line {}\n",
            diagnostic.start.filename(),
            diagnostic.start.line_number()
        ));

        let Some(line_content) = diagnostic.start.line_text() else {
            return output;
        };

        let line_num = diagnostic.start.line_number();
        let padding = " ".repeat(line_num.to_string().len());

        output.push_str(&format!(
            " {}-->{} {} [{}]\n",
            blue,
            reset,
            diagnostic.start,
            diagnostic.kind.code()
        ));
        output.push_str(&format!(" {} {}|{}\n", padding, blue, reset));
        output.push_str(&format!(
            " {}{}{} |{} {}\n",
            blue, line_num, reset, reset, line_content
        ));

        let col_start = diagnostic.start.column;
        let underline_len = if diagnostic.start.line == diagnostic.end.line {
            diagnostic.end.column.saturating_sub(col_start).max(1)
        } else {
            line_content.chars().count().saturating_sub(col_start).max(1)
        };

        output.push_str(&format!(
            " {} {}|{} {}{}{}{}\n",
            padding,
            blue,
            reset,
            " ".repeat(col_start),
            red,
            "^".repeat(underline_len),
            reset
        ));

        output
    }
}
