use crate::Result;
use crate::cgi::{REQUEST_META_VARS, write_env_report, write_header_block};
use crate::probes::config::ProbeConfig;

use std::io::Write;
use tracing::debug;

/// Response headers the environment probe announces
const RESPONSE_HEADERS: &[(&str, &str)] = &[("content-type", "text/html"), ("x-special", "haha")];

/// Dumps the standard CGI request metadata
///
/// Writes a fixed response header block followed by a `NAME = value`
/// report of the ten standard request-metadata variables.
pub struct EnvProbe {
    config: ProbeConfig,
}

impl EnvProbe {
    /// Creates an environment probe with the given configuration
    pub fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    /// Writes the header block and environment report to `out`
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        write_header_block(out, RESPONSE_HEADERS, self.config.terminator)?;
        write_env_report(out, REQUEST_META_VARS)?;
        out.flush()?;

        debug!(vars = REQUEST_META_VARS.len(), "environment report written");
        Ok(())
    }
}
