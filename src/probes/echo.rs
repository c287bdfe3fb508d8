use crate::Result;
use crate::framing::{DEFAULT_LINE_CAPACITY, FramerConfig, LineFramer};
use crate::probes::config::ProbeConfig;

use std::io::{Read, Write};
use tracing::{debug, info};

/// Echoes framed lines from the input stream back to the output stream
///
/// Each line is written back with the configured terminator and flushed
/// immediately so the harness on the other end observes it without
/// delay. The loop stops at a clean end of stream; an overlong or
/// unterminated line aborts the probe instead of echoing corrupted
/// data.
pub struct LineEchoProbe {
    config: ProbeConfig,
}

impl LineEchoProbe {
    /// Creates a line echo probe with the given configuration
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    /// Runs the echo loop until `input` is exhausted
    pub fn run<R: Read, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        let framer = LineFramer::new(FramerConfig {
            terminator: self.config.terminator,
        });
        let mut buf = [0u8; DEFAULT_LINE_CAPACITY];
        let mut echoed = 0usize;

        while let Some(len) = framer.read_line(input, &mut buf)? {
            out.write_all(&buf[..len])?;
            framer.terminator().write_to(out)?;
            out.flush()?;

            echoed += 1;
            debug!(len, "echoed line");
        }

        info!(lines = echoed, "input drained, echo loop done");
        Ok(())
    }
}
