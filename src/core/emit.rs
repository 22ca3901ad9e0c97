//! Output attached to a single transition.

/// Bytes emitted by one transition.
///
/// Most transitions emit nothing or echo the current byte. The only
/// transition that emits two bytes is the one that resolves a pending `/`
/// into ordinary code: the held slash is flushed together with the byte
/// that followed it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Emit {
    buf: [u8; 2],
    len: u8,
}

impl Emit {
    /// No output.
    pub const NONE: Emit = Emit {
        buf: [0; 2],
        len: 0,
    };

    pub const fn one(byte: u8) -> Self {
        Emit {
            buf: [byte, 0],
            len: 1,
        }
    }

    pub const fn two(first: u8, second: u8) -> Self {
        Emit {
            buf: [first, second],
            len: 2,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
