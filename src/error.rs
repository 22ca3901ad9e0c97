//! Errors surfaced by a decomment run.

use thiserror::Error;

/// Errors that can end a run.
#[derive(Debug, Error)]
pub enum DecommentError {
    /// The stream ended inside a `/* ... */` block. `line` is where the
    /// block was opened (1-based).
    #[error("unterminated comment opened on line {line}")]
    UnterminatedComment { line: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DecommentError {
    pub fn is_unterminated_comment(&self) -> bool {
        matches!(self, Self::UnterminatedComment { .. })
    }
}
