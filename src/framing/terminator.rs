use std::io::{self, Write};

/// Line terminator convention, one or two bytes
///
/// The terminator is an explicit value handed to the framer rather than a
/// platform branch inside it; the scan behaves identically on every
/// target for a given value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// Single terminator byte, e.g. `\n`
    Byte(u8),
    /// Two-byte terminator sequence, e.g. `\r` followed by `\n`
    Pair(u8, u8),
}

impl Terminator {
    /// Bare line feed
    pub const LF: Terminator = Terminator::Byte(b'\n');

    /// Carriage return followed by line feed
    pub const CRLF: Terminator = Terminator::Pair(b'\r', b'\n');

    /// Terminator the probe binaries put on the wire for this target
    /// family: bare LF on Windows, where text-mode standard output
    /// re-expands it to CRLF, and literal CRLF everywhere else.
    #[cfg(windows)]
    pub const NATIVE: Terminator = Terminator::LF;
    /// Terminator the probe binaries put on the wire for this target
    /// family: bare LF on Windows, where text-mode standard output
    /// re-expands it to CRLF, and literal CRLF everywhere else.
    #[cfg(not(windows))]
    pub const NATIVE: Terminator = Terminator::CRLF;

    /// Number of bytes in the terminator sequence
    pub const fn width(self) -> usize {
        match self {
            Terminator::Byte(_) => 1,
            Terminator::Pair(_, _) => 2,
        }
    }

    /// Checks whether `buf` ends with this terminator
    ///
    /// The match is positional: the last byte of `buf` must be the final
    /// terminator byte, and for a pair the byte immediately before it
    /// must be the first, adjacent and in order. Returns the offset at
    /// which the terminator begins, i.e. the length of the line content
    /// preceding it.
    pub fn match_end(self, buf: &[u8]) -> Option<usize> {
        match self {
            Terminator::Byte(b) => match buf {
                [.., last] if *last == b => Some(buf.len() - 1),
                _ => None,
            },
            Terminator::Pair(first, second) => match buf {
                [.., a, b] if *a == first && *b == second => Some(buf.len() - 2),
                _ => None,
            },
        }
    }

    /// Writes the terminator bytes to `out`
    pub fn write_to<W: Write>(self, out: &mut W) -> io::Result<()> {
        match self {
            Terminator::Byte(b) => out.write_all(&[b]),
            Terminator::Pair(first, second) => out.write_all(&[first, second]),
        }
    }
}
