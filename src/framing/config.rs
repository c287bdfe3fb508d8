use crate::framing::terminator::Terminator;

/// Scratch buffer size used by the probe programs, in bytes
///
/// Lines must terminate within this many bytes, terminator included;
/// longer lines are a framing error, not a truncation.
pub const DEFAULT_LINE_CAPACITY: usize = 200;

/// Configuration for the line framer
///
/// # Examples
///
/// ```
/// use cgiprobe::framing::{FramerConfig, Terminator};
///
/// let config = FramerConfig {
///     terminator: Terminator::CRLF,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct FramerConfig {
    /// Terminator sequence ending each line
    pub terminator: Terminator,
}

impl Default for FramerConfig {
    fn default() -> Self {
        Self {
            terminator: Terminator::CRLF,
        }
    }
}
