//! Pipeline - text in, AST or diagnostic out
//!
//! Every call builds its own lexer and parser, so runs share no state.

use crate::ast::Node;
use crate::parser::Parser;
use arith_error::Result;
use arith_lexer::Lexer;

/// Lexes and parses `text`, reporting `filename` in diagnostics.
///
/// A lexer failure short-circuits: the parser never sees a partial token
/// sequence. At most one diagnostic is returned.
pub fn run(filename: &str, text: &str) -> Result<Node> {
    let mut lexer = Lexer::new(filename, text);
    let tokens = lexer.tokenize().inspect_err(|diagnostic| {
        tracing::debug!(filename, category = diagnostic.category(), "lexing failed");
    })?;
    tracing::debug!(filename, tokens = tokens.len(), "lexed");

    let mut parser = Parser::new(tokens, lexer.position().snapshot());
    let ast = parser.parse().inspect_err(|diagnostic| {
        tracing::debug!(filename, category = diagnostic.category(), "parsing failed");
    })?;
    tracing::debug!(filename, depth = ast.depth(), "parsed");

    Ok(ast)
}
