use crate::framing::Terminator;

/// Configuration shared by the probe programs
///
/// # Examples
///
/// ```
/// use cgiprobe::probes::ProbeConfig;
/// use cgiprobe::framing::Terminator;
///
/// let config = ProbeConfig {
///     terminator: Terminator::CRLF,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Terminator convention used on both the input and output streams
    pub terminator: Terminator,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            terminator: Terminator::NATIVE,
        }
    }
}
