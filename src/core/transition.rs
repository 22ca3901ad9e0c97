//! The pure transition function.
//!
//! `transition` is total over every `(Grammar, State, Symbol)` triple and has
//! no side effects: given the same inputs it always produces the same
//! [`Step`]. The streaming shell in [`crate::stream`] is the only place that
//! holds a state across calls.

use super::{Emit, Grammar, State, Symbol};

const SLASH: u8 = b'/';
const STAR: u8 = b'*';
const DQUOTE: u8 = b'"';
const SQUOTE: u8 = b'\'';
const BACKSLASH: u8 = b'\\';
const NEWLINE: u8 = b'\n';

/// Result of one transition: the next state and the bytes to emit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Step {
    pub next: State,
    pub emit: Emit,
}

impl Step {
    fn silent(next: State) -> Self {
        Step {
            next,
            emit: Emit::NONE,
        }
    }

    fn echo(next: State, byte: u8) -> Self {
        Step {
            next,
            emit: Emit::one(byte),
        }
    }

    fn flush_slash(next: State, byte: u8) -> Self {
        Step {
            next,
            emit: Emit::two(SLASH, byte),
        }
    }
}

/// Advance the transducer by one symbol.
///
/// On [`Symbol::End`] the returned state is the state the stream finished in
/// (a pending `/` is flushed and resolves to `Code`). Callers decide success
/// with [`State::accepts_end_of_stream`] on that state.
///
/// # Example
///
/// ```rust
/// use decomment::core::{transition, Grammar, State, Symbol};
///
/// let step = transition(Grammar::Classic, State::SawSlash, Symbol::Byte(b'x'));
/// assert_eq!(step.next, State::Code);
/// assert_eq!(step.emit.as_slice(), b"/x");
/// ```
pub fn transition(grammar: Grammar, state: State, symbol: Symbol) -> Step {
    let byte = match symbol {
        Symbol::Byte(byte) => byte,
        Symbol::End => return end_of_stream(state),
    };

    match state {
        State::Code => match byte {
            SLASH => Step::silent(State::SawSlash),
            DQUOTE => Step::echo(State::InString, byte),
            SQUOTE => Step::echo(State::InChar, byte),
            _ => Step::echo(State::Code, byte),
        },

        // The held slash is discarded when it opens a comment and flushed
        // ahead of anything else.
        State::SawSlash => match byte {
            STAR => Step::silent(State::InComment),
            SLASH => match grammar {
                Grammar::Classic => Step::silent(State::SawSlash),
                Grammar::LineComments => Step::silent(State::InLineComment),
            },
            DQUOTE => Step::flush_slash(State::InString, byte),
            SQUOTE => Step::flush_slash(State::InChar, byte),
            _ => Step::flush_slash(State::Code, byte),
        },

        State::InComment => match byte {
            STAR => Step::silent(State::SawStar),
            _ => Step::silent(State::InComment),
        },

        State::SawStar => match byte {
            SLASH => Step::silent(State::Code),
            STAR => Step::silent(State::SawStar),
            _ => Step::silent(State::InComment),
        },

        State::InString => match byte {
            DQUOTE => Step::echo(State::Code, byte),
            BACKSLASH => Step::echo(State::StringEscape, byte),
            _ => Step::echo(State::InString, byte),
        },

        State::StringEscape => Step::echo(State::InString, byte),

        State::InChar => match byte {
            SQUOTE => Step::echo(State::Code, byte),
            BACKSLASH => Step::echo(State::CharEscape, byte),
            _ => Step::echo(State::InChar, byte),
        },

        State::CharEscape => Step::echo(State::InChar, byte),

        State::InLineComment => match byte {
            NEWLINE => Step::echo(State::Code, byte),
            _ => Step::silent(State::InLineComment),
        },
    }
}

fn end_of_stream(state: State) -> Step {
    match state {
        State::SawSlash => Step {
            next: State::Code,
            emit: Emit::one(SLASH),
        },
        other => Step::silent(other),
    }
}
