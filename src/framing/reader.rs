use crate::framing::config::FramerConfig;
use crate::framing::terminator::Terminator;

use std::io::{self, Read};
use tracing::trace;

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("line too long: no terminator within {capacity} bytes")]
    LineTooLong { capacity: usize },
    #[error("stream ended mid-line after {read} bytes")]
    TruncatedLine { read: usize },
}

/// Locates line terminators in a byte stream using a bounded buffer
///
/// The framer reads one byte at a time into a caller-provided scratch
/// buffer and stops at the first position where the configured
/// terminator ends. The buffer bounds the line length: content plus
/// terminator must fit within it.
#[derive(Debug, Clone, Default)]
pub struct LineFramer {
    config: FramerConfig,
}

impl LineFramer {
    /// Creates a framer with the given configuration
    pub fn new(config: FramerConfig) -> Self {
        Self { config }
    }

    /// Terminator this framer scans for
    pub fn terminator(&self) -> Terminator {
        self.config.terminator
    }

    /// Reads the next line from `reader` into `buf`
    ///
    /// Returns `Ok(Some(len))` when a terminator was found; the line
    /// content is `buf[..len]`, the terminator itself excluded, and
    /// exactly `len` plus the terminator width bytes were consumed from
    /// the stream. Returns `Ok(None)` when the stream ends before any byte
    /// of a new line, which is the only way to tell "no data" apart
    /// from an empty line (`Ok(Some(0))`).
    ///
    /// Contents of `buf` beyond the returned length are garbage from
    /// earlier calls and must not be read.
    ///
    /// # Errors
    ///
    /// [`FrameError::LineTooLong`] when `buf` fills up before a
    /// terminator appears; the stream is left positioned past the
    /// consumed bytes and no resynchronization is attempted.
    /// [`FrameError::TruncatedLine`] when the stream ends after at least
    /// one content byte but before a complete terminator, including a
    /// lone first byte of a two-byte pair. The partial line stays
    /// readable in `buf[..read]` for callers that want to salvage it.
    pub fn read_line<R: Read>(
        &self,
        reader: &mut R,
        buf: &mut [u8],
    ) -> Result<Option<usize>, FrameError> {
        let capacity = buf.len();
        let terminator = self.config.terminator;
        let mut offset = 0;

        loop {
            if offset == capacity {
                return Err(FrameError::LineTooLong { capacity });
            }

            if read_byte(reader, &mut buf[offset..=offset])? == 0 {
                if offset == 0 {
                    return Ok(None);
                }
                return Err(FrameError::TruncatedLine { read: offset });
            }
            offset += 1;

            if let Some(len) = terminator.match_end(&buf[..offset]) {
                trace!(len, consumed = offset, "framed line");
                return Ok(Some(len));
            }
        }
    }
}

/// Reads a single byte, retrying interrupted reads; 0 means end of stream
fn read_byte<R: Read>(reader: &mut R, slot: &mut [u8]) -> io::Result<usize> {
    loop {
        match reader.read(slot) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
