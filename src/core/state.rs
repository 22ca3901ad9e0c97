//! Transducer states.
//!
//! The current [`State`] is the machine's entire memory. Every piece of
//! history the transducer needs (a pending `/`, a pending `*`, being inside
//! an escape) is encoded in which variant it occupies.

use serde::{Deserialize, Serialize};

/// Position of the transducer relative to code, literals and comments.
///
/// All methods are pure. States are plain `Copy` values so they can be
/// threaded through [`transition`](crate::core::transition) by value.
///
/// # Example
///
/// ```rust
/// use decomment::core::State;
///
/// let state = State::default();
/// assert_eq!(state, State::Code);
/// assert_eq!(state.name(), "Code");
/// assert!(state.accepts_end_of_stream());
/// assert!(!State::SawStar.accepts_end_of_stream());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum State {
    /// Outside any comment or literal.
    #[default]
    Code,
    /// Last symbol was a `/` that has not been emitted yet.
    SawSlash,
    /// Inside a `/* ... */` block with no `*` pending.
    InComment,
    /// Inside a block comment, last symbol was `*`.
    SawStar,
    /// Inside a `"..."` literal.
    InString,
    /// Inside a string literal, last symbol was `\`.
    StringEscape,
    /// Inside a `'...'` literal.
    InChar,
    /// Inside a character literal, last symbol was `\`.
    CharEscape,
    /// Inside a `//` comment. Only reachable under
    /// [`Grammar::LineComments`](crate::core::Grammar::LineComments).
    InLineComment,
}

impl State {
    /// Every state, in declaration order.
    pub const ALL: [State; 9] = [
        State::Code,
        State::SawSlash,
        State::InComment,
        State::SawStar,
        State::InString,
        State::StringEscape,
        State::InChar,
        State::CharEscape,
        State::InLineComment,
    ];

    /// State name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Code => "Code",
            Self::SawSlash => "SawSlash",
            Self::InComment => "InComment",
            Self::SawStar => "SawStar",
            Self::InString => "InString",
            Self::StringEscape => "StringEscape",
            Self::InChar => "InChar",
            Self::CharEscape => "CharEscape",
            Self::InLineComment => "InLineComment",
        }
    }

    /// Check if this state is inside a block comment.
    ///
    /// A stream ending in one of these states has an unterminated comment.
    pub fn is_block_comment(&self) -> bool {
        matches!(self, Self::InComment | Self::SawStar)
    }

    /// Check if this state discards input (block or line comment body).
    pub fn is_comment(&self) -> bool {
        self.is_block_comment() || matches!(self, Self::InLineComment)
    }

    /// Check if this state is inside a string or character literal,
    /// including the escape states.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::InString | Self::StringEscape | Self::InChar | Self::CharEscape
        )
    }

    /// Check if end-of-stream in this state counts as success.
    ///
    /// Only an open block comment fails. Unterminated literals and a dangling
    /// `/` are accepted.
    pub fn accepts_end_of_stream(&self) -> bool {
        !self.is_block_comment()
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
