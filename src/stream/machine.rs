//! Stateful wrapper that threads a [`State`] through the pure transition
//! function.

use crate::core::{transition, Emit, Grammar, State, Symbol};
use crate::error::DecommentError;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Counters collected while streaming.
///
/// Stats never influence transitions. They exist for diagnostics and for
/// reporting where an unterminated comment started.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Input bytes consumed.
    pub bytes_read: u64,
    /// Output bytes produced.
    pub bytes_written: u64,
    /// Comment openers seen, including one left open at end-of-stream.
    pub comments: u64,
    /// Newlines consumed so far.
    pub newlines: usize,
    /// Line (1-based) on which the currently open comment began.
    pub open_comment_line: Option<usize>,
}

impl Stats {
    /// Current 1-based line.
    pub fn line(&self) -> usize {
        self.newlines.saturating_add(1)
    }
}

/// Outcome of a successful run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub grammar: Grammar,
    /// State the stream ended in, after flushing a pending `/`.
    pub final_state: State,
    pub stats: Stats,
}

/// Streaming comment stripper.
///
/// Bytes may be fed in any number of chunks; output is identical to feeding
/// the whole input at once.
///
/// # Example
///
/// ```rust
/// use decomment::Decommenter;
///
/// let mut machine = Decommenter::new();
/// let mut out = Vec::new();
/// machine.feed(b"int x; /* co", &mut out);
/// machine.feed(b"unter */ int y;/", &mut out);
/// let summary = machine.finish(&mut out).unwrap();
///
/// assert_eq!(out, b"int x;  int y;/");
/// assert_eq!(summary.stats.comments, 1);
/// ```
#[derive(Clone, Debug)]
pub struct Decommenter {
    grammar: Grammar,
    state: State,
    stats: Stats,
}

impl Default for Decommenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Decommenter {
    /// Create a machine in the `Code` state using the classic grammar.
    pub fn new() -> Self {
        Self::with_grammar(Grammar::default())
    }

    pub fn with_grammar(grammar: Grammar) -> Self {
        Self {
            grammar,
            state: State::default(),
            stats: Stats::default(),
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> State {
        self.state
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Consume one input byte and return what it emits.
    pub fn step(&mut self, byte: u8) -> Emit {
        let from = self.state;
        let step = transition(self.grammar, from, Symbol::Byte(byte));

        if !from.is_comment() && step.next.is_comment() {
            let line = self.stats.line();
            self.stats.comments += 1;
            self.stats.open_comment_line = Some(line);
            debug!(line, state = step.next.name(), "comment opened");
        } else if from.is_comment() && !step.next.is_comment() {
            debug!(
                opened = ?self.stats.open_comment_line,
                line = self.stats.line(),
                "comment closed"
            );
            self.stats.open_comment_line = None;
        }

        self.stats.bytes_read += 1;
        self.stats.bytes_written += step.emit.len() as u64;
        if byte == b'\n' {
            self.stats.newlines += 1;
        }
        self.state = step.next;
        step.emit
    }

    /// Consume a chunk of input, appending everything it emits to `out`.
    pub fn feed(&mut self, input: &[u8], out: &mut Vec<u8>) {
        trace!(len = input.len(), state = self.state.name(), "feeding chunk");
        for &byte in input {
            out.extend_from_slice(self.step(byte).as_slice());
        }
    }

    /// Signal end-of-stream.
    ///
    /// Flushes a pending `/` into `out`. Fails with
    /// [`DecommentError::UnterminatedComment`] if the stream ended inside a
    /// block comment; output already produced is left as is.
    pub fn finish(mut self, out: &mut Vec<u8>) -> Result<Summary, DecommentError> {
        let step = transition(self.grammar, self.state, Symbol::End);
        out.extend_from_slice(step.emit.as_slice());
        self.stats.bytes_written += step.emit.len() as u64;
        self.state = step.next;

        if !self.state.accepts_end_of_stream() {
            let line = self.stats.open_comment_line.unwrap_or_else(|| self.stats.line());
            return Err(DecommentError::UnterminatedComment { line });
        }

        if self.state.is_literal() {
            warn!(
                state = self.state.name(),
                line = self.stats.line(),
                "input ended inside an unterminated literal"
            );
        }

        Ok(Summary {
            grammar: self.grammar,
            final_state: self.state,
            stats: self.stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(grammar: Grammar, input: &[u8]) -> (Vec<u8>, Result<Summary, DecommentError>) {
        let mut machine = Decommenter::with_grammar(grammar);
        let mut out = Vec::new();
        machine.feed(input, &mut out);
        let result = machine.finish(&mut out);
        (out, result)
    }

    #[test]
    fn new_machine_starts_in_code() {
        let machine = Decommenter::new();
        assert_eq!(machine.state(), State::Code);
        assert_eq!(machine.grammar(), Grammar::Classic);
        assert_eq!(machine.stats(), &Stats::default());
    }

    #[test]
    fn step_returns_emitted_bytes() {
        let mut machine = Decommenter::new();
        assert!(machine.step(b'/').is_empty());
        assert_eq!(machine.state(), State::SawSlash);
        assert_eq!(machine.step(b'x').as_slice(), b"/x");
        assert_eq!(machine.state(), State::Code);
    }

    #[test]
    fn stats_track_bytes_and_comments() {
        let (out, result) = strip(Grammar::Classic, b"a/*x*/b/*y*/c\n");
        assert_eq!(out, b"abc\n");
        let stats = result.unwrap().stats;
        assert_eq!(stats.bytes_read, 14);
        assert_eq!(stats.bytes_written, 4);
        assert_eq!(stats.comments, 2);
        assert_eq!(stats.newlines, 1);
        assert_eq!(stats.open_comment_line, None);
    }

    #[test]
    fn line_is_one_past_newline_count() {
        let mut stats = Stats::default();
        assert_eq!(stats.line(), 1);
        stats.newlines = 41;
        assert_eq!(stats.line(), 42);
        stats.newlines = usize::MAX;
        assert_eq!(stats.line(), usize::MAX);
    }

    #[test]
    fn unterminated_comment_reports_opening_line() {
        let (out, result) = strip(Grammar::Classic, b"a\nb\n/* open\nstill open");
        assert_eq!(out, b"a\nb\n");
        match result {
            Err(DecommentError::UnterminatedComment { line }) => assert_eq!(line, 3),
            other => panic!("expected unterminated comment, got {other:?}"),
        }
    }

    #[test]
    fn unterminated_comment_keeps_partial_output() {
        let (out, result) = strip(Grammar::Classic, b"a/* open");
        assert_eq!(out, b"a");
        assert!(result.unwrap_err().is_unterminated_comment());
    }

    #[test]
    fn trailing_slash_counts_as_written() {
        let (out, result) = strip(Grammar::Classic, b"a/");
        assert_eq!(out, b"a/");
        let summary = result.unwrap();
        assert_eq!(summary.final_state, State::Code);
        assert_eq!(summary.stats.bytes_written, 2);
    }

    #[test]
    fn unterminated_literal_succeeds() {
        let (out, result) = strip(Grammar::Classic, b"\"abc /* no");
        assert_eq!(out, b"\"abc /* no");
        assert_eq!(result.unwrap().final_state, State::InString);
    }

    #[test]
    fn line_comment_at_end_of_stream_succeeds() {
        let (out, result) = strip(Grammar::LineComments, b"x; // done");
        assert_eq!(out, b"x; ");
        let summary = result.unwrap();
        assert_eq!(summary.final_state, State::InLineComment);
        assert_eq!(summary.stats.comments, 1);
        assert_eq!(summary.stats.open_comment_line, Some(1));
    }

    #[test]
    fn chunk_boundaries_do_not_matter() {
        let input = b"a/*b*/c\"/*\"'\\''//d/";
        let (whole, _) = strip(Grammar::Classic, input);

        for split in 0..=input.len() {
            let mut machine = Decommenter::new();
            let mut out = Vec::new();
            machine.feed(&input[..split], &mut out);
            machine.feed(&input[split..], &mut out);
            machine.finish(&mut out).unwrap();
            assert_eq!(out, whole, "split at {split}");
        }
    }
}
