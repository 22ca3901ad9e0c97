//! Drive a [`Decommenter`] from a reader into a writer.

use crate::core::Grammar;
use crate::error::DecommentError;
use crate::stream::machine::{Decommenter, Summary};
use std::io::{self, ErrorKind, Read, Write};
use tracing::debug;

/// Bytes requested from the reader per call.
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Strip comments from `reader` into `writer` with the classic grammar.
///
/// Output is written as it is produced. On
/// [`DecommentError::UnterminatedComment`] the writer holds everything
/// emitted before the comment opened.
pub fn run<R: Read, W: Write>(reader: R, writer: W) -> Result<Summary, DecommentError> {
    run_with_grammar(Grammar::default(), reader, writer)
}

pub fn run_with_grammar<R: Read, W: Write>(
    grammar: Grammar,
    reader: R,
    writer: W,
) -> Result<Summary, DecommentError> {
    drive(Decommenter::with_grammar(grammar), reader, writer)
}

/// Continue an existing machine until `reader` is exhausted, then signal
/// end-of-stream.
///
/// Input is read in chunks of up to [`CHUNK_SIZE`] bytes. The output of each
/// chunk is handed to `writer` before the next chunk is read.
pub fn drive<R: Read, W: Write>(
    mut machine: Decommenter,
    mut reader: R,
    mut writer: W,
) -> Result<Summary, DecommentError> {
    debug!(grammar = machine.grammar().name(), "starting run");

    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut out = Vec::with_capacity(CHUNK_SIZE);
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        out.clear();
        machine.feed(&buf[..n], &mut out);
        writer.write_all(&out)?;
    }

    out.clear();
    let result = machine.finish(&mut out);
    writer.write_all(&out)?;
    writer.flush()?;

    if let Ok(summary) = &result {
        debug!(
            bytes_read = summary.stats.bytes_read,
            bytes_written = summary.stats.bytes_written,
            comments = summary.stats.comments,
            "run complete"
        );
    }
    result
}

/// Strip comments from an in-memory string with the classic grammar.
///
/// # Example
///
/// ```rust
/// use decomment::strip_comments;
///
/// assert_eq!(strip_comments("a/*x*/b").unwrap(), "ab");
/// assert!(strip_comments("a/* open").is_err());
/// ```
pub fn strip_comments(input: &str) -> Result<String, DecommentError> {
    let mut machine = Decommenter::new();
    let mut out = Vec::with_capacity(input.len());
    machine.feed(input.as_bytes(), &mut out);
    machine.finish(&mut out)?;
    // Comment delimiters are ASCII, so removal never splits a code point.
    String::from_utf8(out).map_err(|e| io::Error::new(ErrorKind::InvalidData, e).into())
}
