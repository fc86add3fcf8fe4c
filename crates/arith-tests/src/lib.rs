//! Integration tests for the arith front end
//!
//! This crate provides end-to-end testing of the complete pipeline:
//! Source → Lexer → Parser → AST

use arith_error::{Diagnostic, ErrorKind};
use arith_parser::{run, Node};
use std::fs;
use std::io;
use std::path::Path;

/// Source name used by every helper
pub const TEST_FILE: &str = "<test>";

/// Runs the pipeline on a file, ignoring one trailing line terminator
pub fn run_file(path: &Path) -> io::Result<Result<Node, Diagnostic>> {
    let text = fs::read_to_string(path)?;
    let text = text
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(text.as_str());

    Ok(run(&path.display().to_string(), text))
}

/// Renders a tree with source operators and one pair of parentheses per
/// binary node, e.g. `(2+(3*4))`
pub fn fully_parenthesize(node: &Node) -> String {
    match node {
        Node::Number(token) => token
            .value()
            .map(|value| value.to_string())
            .unwrap_or_default(),
        Node::BinaryOperation { left, op, right } => format!(
            "({}{}{})",
            fully_parenthesize(left),
            op.kind.symbol().unwrap_or('?'),
            fully_parenthesize(right)
        ),
    }
}

/// Asserts that `source` parses and its debug rendering equals `expected`
pub fn assert_parses_to(source: &str, expected: &str) {
    match run(TEST_FILE, source) {
        Ok(ast) => assert_eq!(
            ast.to_string(),
            expected,
            "unexpected tree for source {:?}",
            source
        ),
        Err(diagnostic) => panic!(
            "Expected {:?} to parse, but got:\n{}",
            source, diagnostic
        ),
    }
}

/// Asserts that `source` fails with a diagnostic of `kind` and returns it
pub fn assert_fails_with(source: &str, kind: ErrorKind) -> Diagnostic {
    match run(TEST_FILE, source) {
        Ok(ast) => panic!("Expected {:?} to fail, but it parsed to {}", source, ast),
        Err(diagnostic) => {
            assert_eq!(
                diagnostic.kind, kind,
                "unexpected diagnostic for {:?}:\n{}",
                source, diagnostic
            );
            diagnostic
        }
    }
}
