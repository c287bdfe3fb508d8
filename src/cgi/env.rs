use std::env;
use std::io::{self, Write};

/// Request-metadata variables a CGI server sets for every request
pub const REQUEST_META_VARS: &[&str] = &[
    "SERVER_SOFTWARE",
    "SERVER_NAME",
    "SERVER_PORT",
    "GATEWAY_INTERFACE",
    "SERVER_PROTOCOL",
    "REQUEST_METHOD",
    "PATH_INFO",
    "PATH_TRANSLATED",
    "QUERY_STRING",
    "REMOTE_ADDR",
];

/// Client user-agent header as passed through the CGI environment
pub const USER_AGENT_VAR: &str = "HTTP_USER_AGENT";

/// Copies the named environment variables verbatim to `out`
///
/// One `NAME = value` line per variable, always LF-terminated: the
/// report is response body text, not protocol framing, so it does not
/// follow the wire terminator convention. Unset variables are reported
/// with an empty value.
pub fn write_env_report<W: Write>(out: &mut W, names: &[&str]) -> io::Result<()> {
    for name in names {
        let value = env::var(name).unwrap_or_default();
        writeln!(out, "{name} = {value}")?;
    }
    Ok(())
}
