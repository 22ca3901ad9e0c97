//! Input symbols.

/// One unit of input: a byte, or the end-of-stream marker.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Symbol {
    Byte(u8),
    End,
}

impl From<u8> for Symbol {
    fn from(byte: u8) -> Self {
        Symbol::Byte(byte)
    }
}
