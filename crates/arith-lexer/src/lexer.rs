//! Lexer for arithmetic expressions
//!
//! Converts source text into a sequence of tokens, stopping at the first
//! character it does not recognize.

use crate::token::{Token, TokenKind};
use arith_error::{Diagnostic, Position, Result};

/// The arithmetic expression lexer
pub struct Lexer {
    /// Source characters
    chars: Vec<char>,
    /// Live cursor; `pos.index` points at `current`
    pos: Position,
    /// Character under the cursor, `None` once exhausted
    current: Option<char>,
}

impl Lexer {
    /// Creates a new lexer for `source`, reported as `filename` in diagnostics
    pub fn new(filename: &str, source: &str) -> Self {
        let chars: Vec<char> = source.chars().collect();
        let current = chars.first().copied();

        Self {
            chars,
            pos: Position::start(filename, source),
            current,
        }
    }

    /// Current cursor; past the last character once tokenizing succeeded
    pub fn position(&self) -> &Position {
        &self.pos
    }

    /// Advances to the next character
    fn advance(&mut self) {
        self.pos.advance(self.current);
        self.current = self.chars.get(self.pos.index).copied();
    }

    /// Tokenizes the entire source
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.current {
            match ch {
                ' ' | '\t' => self.advance(),
                ch if ch.is_ascii_digit() => {
                    let token = self.scan_number()?;
                    tracing::trace!(token = %token, index = token.start.index, "scanned number");
                    tokens.push(token);
                }
                _ => {
                    let start = self.pos.snapshot();
                    self.advance();

                    match TokenKind::from_symbol(ch) {
                        Some(kind) => tokens.push(Token::new(kind, start, self.pos.snapshot())),
                        None => {
                            tracing::debug!(character = ?ch, index = start.index, "illegal character");
                            return Err(Diagnostic::illegal_character(start, self.pos.snapshot(), ch));
                        }
                    }
                }
            }
        }

        Ok(tokens)
    }

    /// Reads an integer or float literal.
    ///
    /// Stops on the first character that is neither a digit nor the first
    /// `.`, leaving it under the cursor for the caller.
    fn scan_number(&mut self) -> Result<Token> {
        let start = self.pos.snapshot();
        let mut num_str = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.current {
            if ch == '.' {
                if seen_dot {
                    break;
                }
                seen_dot = true;
            } else if !ch.is_ascii_digit() {
                break;
            }

            num_str.push(ch);
            self.advance();
        }

        let end = self.pos.snapshot();

        if !seen_dot {
            return match num_str.parse::<i64>() {
                Ok(value) => Ok(Token::new(TokenKind::Int(value), start, end)),
                Err(_) => Err(Diagnostic::invalid_number(
                    start,
                    end,
                    format!("'{}' does not fit in a 64-bit integer", num_str),
                )),
            };
        }

        if num_str.ends_with('.') {
            return Err(Diagnostic::invalid_number(
                start,
                end,
                format!("'{}' has no digits after the decimal point", num_str),
            ));
        }

        match num_str.parse::<f64>() {
            Ok(value) => Ok(Token::new(TokenKind::Float(value), start, end)),
            Err(_) => Err(Diagnostic::invalid_number(
                start,
                end,
                format!("'{}' is not a valid float", num_str),
            )),
        }
    }
}

/// Tokenizes `source` and returns the tokens
pub fn tokenize(filename: &str, source: &str) -> Result<Vec<Token>> {
    Lexer::new(filename, source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arith_error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn lex(source: &str) -> Vec<TokenKind> {
        tokenize("test", source)
            .expect("source should lex")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn lex_err(source: &str) -> Diagnostic {
        tokenize("test", source).expect_err("source should not lex")
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            lex("*/+-()"),
            vec![
                TokenKind::Multiply,
                TokenKind::Divide,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::OpenParen,
                TokenKind::CloseParen,
            ]
        );
    }

    #[test]
    fn test_integers() {
        assert_eq!(lex("0"), vec![TokenKind::Int(0)]);
        assert_eq!(lex("1234567890"), vec![TokenKind::Int(1234567890)]);
        assert_eq!(lex("007"), vec![TokenKind::Int(7)]);
    }

    #[test]
    fn test_floats() {
        assert_eq!(lex("2.75"), vec![TokenKind::Float(2.75)]);
        assert_eq!(lex("10.0"), vec![TokenKind::Float(10.0)]);
    }

    #[test]
    fn test_whitespace_is_skipped() {
        assert_eq!(
            lex(" \t1 +\t2 "),
            vec![TokenKind::Int(1), TokenKind::Plus, TokenKind::Int(2)]
        );
        assert!(lex("   ").is_empty());
        assert!(lex("").is_empty());
    }

    #[test]
    fn test_number_followed_by_operator() {
        assert_eq!(
            lex("12*3.5/(4)"),
            vec![
                TokenKind::Int(12),
                TokenKind::Multiply,
                TokenKind::Float(3.5),
                TokenKind::Divide,
                TokenKind::OpenParen,
                TokenKind::Int(4),
                TokenKind::CloseParen,
            ]
        );
    }

    #[test]
    fn test_token_positions() {
        let tokens = tokenize("test", "12 + 3").unwrap();

        assert_eq!(tokens[0].start.column, 0);
        assert_eq!(tokens[0].end.column, 2);
        assert_eq!(tokens[1].start.column, 3);
        assert_eq!(tokens[2].start.index, 5);
        assert_eq!(tokens[2].end.index, 6);
    }

    #[test]
    fn test_illegal_character() {
        let err = lex_err("5@3");

        assert_eq!(err.kind, ErrorKind::IllegalCharacter);
        assert_eq!(err.detail, "'@'");
        assert_eq!(err.start.index, 1);
        assert_eq!(err.end.index, 2);
        assert_eq!(err.start.line, 0);
    }

    #[test]
    fn test_second_dot_ends_the_literal() {
        let mut lexer = Lexer::new("test", "1.2.3");
        let err = lexer.tokenize().unwrap_err();

        // `1.2` lexed fine; the stray `.` is what fails
        assert_eq!(err.kind, ErrorKind::IllegalCharacter);
        assert_eq!(err.detail, "'.'");
        assert_eq!(err.start.index, 3);
    }

    #[test]
    fn test_trailing_dot_is_invalid() {
        let err = lex_err("7.+1");

        assert_eq!(err.kind, ErrorKind::InvalidNumber);
        assert_eq!(err.detail, "'7.' has no digits after the decimal point");
        assert_eq!(err.start.index, 0);
        assert_eq!(err.end.index, 2);
    }

    #[test]
    fn test_leading_dot_is_illegal() {
        let err = lex_err(".5");
        assert_eq!(err.kind, ErrorKind::IllegalCharacter);
        assert_eq!(err.detail, "'.'");
    }

    #[test]
    fn test_integer_overflow() {
        let err = lex_err("99999999999999999999");
        assert_eq!(err.kind, ErrorKind::InvalidNumber);
    }

    #[test]
    fn test_newline_is_illegal_and_moves_to_next_line() {
        let err = lex_err("1\n2");

        assert_eq!(err.detail, "'\n'");
        assert_eq!(err.start.line, 0);
        assert_eq!(err.end.line, 1);
        assert_eq!(err.end.column, 0);
    }

    #[test]
    fn test_position_after_tokenize() {
        let mut lexer = Lexer::new("test", "1 + 2");
        lexer.tokenize().unwrap();

        assert_eq!(lexer.position().index, 5);
        assert_eq!(lexer.position().column, 5);
    }
}
