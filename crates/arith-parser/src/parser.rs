//! Parser for arithmetic expressions
//!
//! Converts a sequence of tokens into an AST using recursive descent.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expression := term   (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := INT | FLOAT | '(' expression ')'
//! ```

use crate::ast::Node;
use arith_error::{Diagnostic, Position, Result};
use arith_lexer::{Token, TokenKind};

/// Deepest parenthesis nesting accepted before parsing gives up
pub const MAX_NESTING: usize = 100;

/// Recursive-descent expression parser
pub struct Parser {
    /// Tokens to be parsed
    tokens: Vec<Token>,
    /// Index of the current token
    pos: usize,
    /// Where end-of-input errors point
    eof: Position,
    /// Number of currently open parentheses
    depth: usize,
}

impl Parser {
    /// Creates a new parser; `eof` is the position just past the source text
    pub fn new(tokens: Vec<Token>, eof: Position) -> Self {
        Self {
            tokens,
            pos: 0,
            eof,
            depth: 0,
        }
    }

    // =========================================
    // Helpers
    // =========================================

    /// Returns the current token, `None` past the end
    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Checks if the current token is of the specified type
    fn check(&self, kind: &TokenKind) -> bool {
        self.current().is_some_and(|token| token.is(kind))
    }

    /// Consumes the current token
    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Builds an unexpected-token error at the current token (or end of input)
    fn error_at_current(&self, expected: &str) -> Diagnostic {
        match self.current() {
            Some(token) => Diagnostic::unexpected_token(
                token.start.clone(),
                token.end.clone(),
                format!("Expected {}, found '{}'", expected, token),
            ),
            None => Diagnostic::unexpected_token(
                self.eof.clone(),
                self.eof.clone(),
                format!("Expected {}, found end of input", expected),
            ),
        }
    }

    // =========================================
    // Grammar
    // =========================================

    /// Parses a complete expression; every token must be consumed
    pub fn parse(&mut self) -> Result<Node> {
        let node = self.expression()?;

        if let Some(token) = self.current() {
            return Err(Diagnostic::trailing_tokens(
                token.start.clone(),
                token.end.clone(),
                format!("Unexpected trailing token '{}'", token),
            ));
        }

        Ok(node)
    }

    /// Parse addition/subtraction
    fn expression(&mut self) -> Result<Node> {
        self.binary_operation(Self::term, &[TokenKind::Plus, TokenKind::Minus])
    }

    /// Parse multiplication/division
    fn term(&mut self) -> Result<Node> {
        self.binary_operation(Self::factor, &[TokenKind::Multiply, TokenKind::Divide])
    }

    /// Parse a literal or a parenthesized expression
    fn factor(&mut self) -> Result<Node> {
        let Some(token) = self.current() else {
            return Err(self.error_at_current("number or '('"));
        };

        if token.kind.is_number() {
            let token = token.clone();
            self.pos += 1;
            return Ok(Node::number(token));
        }

        if !token.is(&TokenKind::OpenParen) {
            return Err(self.error_at_current("number or '('"));
        }

        if self.depth >= MAX_NESTING {
            return Err(Diagnostic::unexpected_token(
                token.start.clone(),
                token.end.clone(),
                "Expression nested too deeply",
            ));
        }

        self.pos += 1;
        self.depth += 1;
        let inner = self.expression()?;
        self.depth -= 1;

        if !self.check(&TokenKind::CloseParen) {
            return Err(self.error_at_current("')'"));
        }
        self.pos += 1;

        Ok(inner)
    }

    /// Left-folds `sub (op sub)*` for any `op` in `operators`
    fn binary_operation(
        &mut self,
        sub: fn(&mut Self) -> Result<Node>,
        operators: &[TokenKind],
    ) -> Result<Node> {
        let mut left = sub(self)?;

        while operators.iter().any(|op| self.check(op)) {
            let Some(op) = self.advance() else {
                break;
            };
            let right = sub(self)?;
            left = Node::binary(left, op, right);
        }

        Ok(left)
    }
}

/// Helper function to parse
pub fn parse(tokens: Vec<Token>, eof: Position) -> Result<Node> {
    Parser::new(tokens, eof).parse()
}
