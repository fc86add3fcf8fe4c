//! arith-parser - Parser for arithmetic expressions
//!
//! Converts a sequence of tokens into an AST (Abstract Syntax Tree), and
//! exposes `run`, the text-to-AST entry point.
//!
//! # Example
//!
//! ```rust
//! use arith_parser::run;
//!
//! let ast = run("<example>", "2 + 3 * 4").unwrap();
//! assert_eq!(ast.to_string(), "(INT:2, PLUS, (INT:3, MULTIPLY, INT:4))");
//!
//! let err = run("<example>", "2 $ 3").unwrap_err();
//! assert_eq!(err.to_string(), "Illegal Characters Error:'$'\nFile <example>, line 1");
//! ```

pub mod ast;
pub mod parser;
pub mod pipeline;

pub use ast::Node;
pub use parser::{parse, Parser, MAX_NESTING};
pub use pipeline::run;
