use crate::framing::FrameError;
use thiserror::Error;

/// Error types for the cgiprobe library
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Standard stream errors (read, write, flush)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not terminate within the scratch buffer
    #[error("line too long: no terminator within {0} bytes")]
    LineTooLong(usize),

    /// Input ended in the middle of an unterminated line
    #[error("input ended mid-line after {0} bytes")]
    TruncatedLine(usize),
}

impl From<FrameError> for ProbeError {
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::Io(e) => ProbeError::Io(e),
            FrameError::LineTooLong { capacity } => ProbeError::LineTooLong(capacity),
            FrameError::TruncatedLine { read } => ProbeError::TruncatedLine(read),
        }
    }
}

/// Result type for the cgiprobe library
pub type Result<T> = std::result::Result<T, ProbeError>;

pub mod cgi;
pub mod framing;
pub mod probes;

// Re-export main types for convenience
pub use cgi::{REQUEST_META_VARS, USER_AGENT_VAR, write_env_report, write_header_block};
pub use framing::{DEFAULT_LINE_CAPACITY, FramerConfig, LineFramer, Terminator};
pub use probes::{EnvProbe, LineEchoProbe, PostProbe, ProbeConfig};
