//! Streaming shell around the pure core.
//!
//! [`Decommenter`] owns the single piece of mutable state (the current
//! [`State`](crate::core::State)) and feeds bytes through
//! [`transition`](crate::core::transition). The driver functions connect it
//! to `std::io` readers and writers.

mod driver;
mod machine;

pub use driver::{drive, run, run_with_grammar, strip_comments, CHUNK_SIZE};
pub use machine::{Decommenter, Stats, Summary};
