//! Tokens for arithmetic expressions
//!
//! Defines all token types that the lexer can produce.

use arith_error::Position;
use std::fmt;

/// Numeric literal value carried by `INT` and `FLOAT` tokens
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(n) => write_float(f, *n),
        }
    }
}

/// Shortest round-trip digits, `.0` on whole values, and a signed two-digit
/// exponent outside `1e-4 <= n < 1e16` (`1e+16`, `1e-05`)
fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if !n.is_finite() {
        return write!(f, "{}", n);
    }

    let scientific = format!("{:e}", n);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if n != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs())
    } else if n.fract() == 0.0 {
        write!(f, "{:.1}", n)
    } else {
        write!(f, "{}", n)
    }
}

/// All token types
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // =========================================
    // Literals
    // =========================================
    /// Integer literal: `42`
    Int(i64),
    /// Float literal: `3.14`
    Float(f64),

    // =========================================
    // Operators
    // =========================================
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `+`
    Plus,
    /// `-`
    Minus,

    // =========================================
    // Delimiters
    // =========================================
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
}

impl TokenKind {
    /// Upper-case type name used in debug renderings
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "INT",
            TokenKind::Float(_) => "FLOAT",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::OpenParen => "OPEN_PAREN",
            TokenKind::CloseParen => "CLOSE_PAREN",
        }
    }

    /// Source text of a single-character token
    pub fn symbol(&self) -> Option<char> {
        match self {
            TokenKind::Multiply => Some('*'),
            TokenKind::Divide => Some('/'),
            TokenKind::Plus => Some('+'),
            TokenKind::Minus => Some('-'),
            TokenKind::OpenParen => Some('('),
            TokenKind::CloseParen => Some(')'),
            TokenKind::Int(_) | TokenKind::Float(_) => None,
        }
    }

    /// Maps a single character to its operator or delimiter token
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '*' => Some(TokenKind::Multiply),
            '/' => Some(TokenKind::Divide),
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '(' => Some(TokenKind::OpenParen),
            ')' => Some(TokenKind::CloseParen),
            _ => None,
        }
    }

    /// Literal value of `INT` / `FLOAT` tokens
    pub fn value(&self) -> Option<Number> {
        match self {
            TokenKind::Int(n) => Some(Number::Int(*n)),
            TokenKind::Float(n) => Some(Number::Float(*n)),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, TokenKind::Int(_) | TokenKind::Float(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}:{}", self.name(), value),
            None => f.write_str(self.name()),
        }
    }
}

/// A token with its location in the source
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token type
    pub kind: TokenKind,
    /// Position of the first character
    pub start: Position,
    /// Position just past the last character
    pub end: Position,
}

impl Token {
    pub fn new(kind: TokenKind, start: Position, end: Position) -> Self {
        Self { kind, start, end }
    }

    /// Checks if the token is of a specific type, ignoring literal values
    pub fn is(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.kind) == std::mem::discriminant(kind)
    }

    pub fn value(&self) -> Option<Number> {
        self.kind.value()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::Int(42).to_string(), "INT:42");
        assert_eq!(TokenKind::Int(0).to_string(), "INT:0");
        assert_eq!(TokenKind::Float(1.5).to_string(), "FLOAT:1.5");
        assert_eq!(TokenKind::Float(2.0).to_string(), "FLOAT:2.0");
        assert_eq!(TokenKind::OpenParen.to_string(), "OPEN_PAREN");
    }

    #[test]
    fn test_float_exponent_form() {
        let cases = [
            (1e16, "1e+16"),
            (1.5e20, "1.5e+20"),
            (0.00001, "1e-05"),
            (0.000125, "0.000125"),
            (0.0001, "0.0001"),
            (1e15, "1000000000000000.0"),
            (0.0, "0.0"),
            (123.456, "123.456"),
        ];

        for (value, expected) in cases {
            assert_eq!(Number::Float(value).to_string(), expected, "value {:?}", value);
        }
    }

    #[test]
    fn test_symbol_round_trip() {
        for ch in ['*', '/', '+', '-', '(', ')'] {
            let kind = TokenKind::from_symbol(ch).unwrap();
            assert_eq!(kind.symbol(), Some(ch));
        }
        assert_eq!(TokenKind::from_symbol('.'), None);
    }

    #[test]
    fn test_is_ignores_value() {
        let pos = Position::start("test", "1");
        let token = Token::new(TokenKind::Int(1), pos.clone(), pos);

        assert!(token.is(&TokenKind::Int(0)));
        assert!(!token.is(&TokenKind::Float(1.0)));
        assert_eq!(token.value(), Some(Number::Int(1)));
    }
}
