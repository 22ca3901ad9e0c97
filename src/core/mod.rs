//! Pure transducer core.
//!
//! This module contains everything that decides what happens to a byte:
//! - [`State`]: the eight transducer states (plus the opt-in line comment state)
//! - [`Symbol`]: a byte or the end-of-stream marker
//! - [`Grammar`]: which comment syntaxes are recognized
//! - [`transition`]: the total, side-effect free transition function
//!
//! Nothing in here performs I/O or holds state between calls.

mod emit;
mod grammar;
mod state;
mod symbol;
mod transition;

pub use emit::Emit;
pub use grammar::Grammar;
pub use state::State;
pub use symbol::Symbol;
pub use transition::{transition, Step};
