//! Comment syntaxes recognized by the transducer.

use super::State;
use serde::{Deserialize, Serialize};

/// Which comment forms are stripped.
///
/// `Classic` only knows `/* ... */`. A run of slashes collapses into one
/// pending `/`, so `a//b` becomes `a/b`. `LineComments` additionally treats
/// `//` as a comment running to the end of the line; the terminating newline
/// is kept.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Grammar {
    #[default]
    Classic,
    LineComments,
}

impl Grammar {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::LineComments => "line-comments",
        }
    }

    /// Check if `state` can be reached under this grammar.
    pub fn permits(&self, state: State) -> bool {
        match self {
            Self::Classic => state != State::InLineComment,
            Self::LineComments => true,
        }
    }
}
