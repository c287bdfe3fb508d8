use crate::Result;
use crate::cgi::{REQUEST_META_VARS, USER_AGENT_VAR, write_env_report, write_header_block};
use crate::framing::{DEFAULT_LINE_CAPACITY, FrameError, FramerConfig, LineFramer};
use crate::probes::config::ProbeConfig;

use std::io::{Read, Write};
use tracing::{debug, warn};

/// Response headers the POST probe announces
const RESPONSE_HEADERS: &[(&str, &str)] = &[
    ("content-type", "text/html"),
    ("x-special", "haha"),
    ("set-cookie", "abjcjsjac"),
];

/// Dumps CGI request metadata and echoes one line of POST body
///
/// Same report as [`EnvProbe`](crate::probes::EnvProbe) plus the client
/// user agent, followed by a single body line read from the input
/// stream and echoed back under the configured terminator convention.
pub struct PostProbe {
    config: ProbeConfig,
}

impl PostProbe {
    /// Creates a POST probe with the given configuration
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    /// Writes the report to `out`, echoing one body line from `input`
    ///
    /// A body line that ends at end-of-stream without a terminator is
    /// echoed as-is; a body longer than the scratch buffer is an error.
    pub fn run<R: Read, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        let terminator = self.config.terminator;

        write_header_block(out, RESPONSE_HEADERS, terminator)?;
        write_env_report(out, REQUEST_META_VARS)?;
        write_env_report(out, &[USER_AGENT_VAR])?;
        write!(out, "POST Body Is: ")?;
        terminator.write_to(out)?;

        let framer = LineFramer::new(FramerConfig { terminator });
        let mut buf = [0u8; DEFAULT_LINE_CAPACITY];
        let body = match framer.read_line(input, &mut buf) {
            Ok(Some(len)) => &buf[..len],
            Ok(None) => {
                warn!("no POST body on the input stream");
                &buf[..0]
            }
            Err(FrameError::TruncatedLine { read }) => {
                warn!(read, "POST body not terminated, echoing partial line");
                &buf[..read]
            }
            Err(e) => return Err(e.into()),
        };

        out.write_all(body)?;
        terminator.write_to(out)?;
        out.flush()?;

        debug!(len = body.len(), "POST body echoed");
        Ok(())
    }
}
