//! arith-lexer - Lexer/Tokenizer for arithmetic expressions
//!
//! This crate converts expression text into a sequence of tokens.
//!
//! # Features
//!
//! - Integer and float literals (`42`, `3.14`)
//! - Operators `+ - * /` and parentheses
//! - Spaces and tabs between tokens are skipped
//! - Any other character stops lexing with an `Illegal Characters Error`
//!
//! # Example
//!
//! ```rust
//! use arith_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("<example>", "2 + 3.5");
//! let tokens = lexer.tokenize().unwrap();
//!
//! assert_eq!(tokens[0].kind, TokenKind::Int(2));
//! assert_eq!(tokens[1].kind, TokenKind::Plus);
//! assert_eq!(tokens[2].kind, TokenKind::Float(3.5));
//! ```

pub mod lexer;
pub mod token;

pub use lexer::{tokenize, Lexer};
pub use token::{Number, Token, TokenKind};
