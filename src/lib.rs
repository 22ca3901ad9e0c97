//! Decomment: a streaming comment stripper for C-like source.
//!
//! Decomment removes `/* ... */` comments from a byte stream while leaving
//! string literals, character literals and all other code untouched. It is
//! built as a pure core and an imperative shell:
//!
//! - **Core**: a deterministic Mealy machine. [`core::transition`] maps a
//!   `(Grammar, State, Symbol)` triple to the next state and the bytes to
//!   emit, with exactly one symbol of lookback encoded in the state.
//! - **Stream**: [`Decommenter`] threads the current state through the core
//!   and connects it to readers and writers.
//!
//! A stream ending inside a block comment fails with
//! [`DecommentError::UnterminatedComment`]. Every other ending succeeds,
//! including unterminated string and character literals.
//!
//! # Example
//!
//! ```rust
//! use decomment::{run, DecommentError};
//!
//! let source = b"int x = 1; /* one */ char *s = \"/* kept */\";";
//! let mut out = Vec::new();
//! run(&source[..], &mut out).unwrap();
//! assert_eq!(out, b"int x = 1;  char *s = \"/* kept */\";");
//!
//! let mut out = Vec::new();
//! let err = run(&b"a/* open"[..], &mut out).unwrap_err();
//! assert!(matches!(err, DecommentError::UnterminatedComment { line: 1 }));
//! assert_eq!(out, b"a");
//! ```

pub mod core;
pub mod error;
pub mod stream;

// Re-export commonly used types
pub use crate::core::{Grammar, State};
pub use error::DecommentError;
pub use stream::{run, run_with_grammar, strip_comments, Decommenter, Stats, Summary};
