//! arith-error - Positions and diagnostics for the arith front end
//!
//! This crate provides the cursor the lexer advances through the source and
//! the single diagnostic type every phase reports failures with.
//!
//! # Example
//!
//! ```rust
//! use arith_error::{Diagnostic, DiagnosticRenderer, Position};
//!
//! let mut pos = Position::start("example.txt", "5@3");
//! pos.advance(Some('5'));
//!
//! let start = pos.snapshot();
//! pos.advance(Some('@'));
//!
//! let diagnostic = Diagnostic::illegal_character(start, pos.snapshot(), '@');
//! assert_eq!(
//!     diagnostic.to_string(),
//!     "Illegal Characters Error:'@'\nFile example.txt, line 1"
//! );
//!
//! let renderer = DiagnosticRenderer::new().without_colors();
//! println!("{}", renderer.render(&diagnostic));
//! ```

pub mod diagnostic;
pub mod position;

pub use diagnostic::{Diagnostic, DiagnosticRenderer, ErrorCode, ErrorKind};
pub use position::Position;

/// Default Result type for operations that may fail with a diagnostic
pub type Result<T> = std::result::Result<T, Diagnostic>;
