use crate::framing::Terminator;
use std::io::{self, Write};

/// Writes a CGI response header block to `out`
///
/// Each `(name, value)` pair becomes a `name: value` line ending with
/// `terminator`, and one extra terminator closes the block (the blank
/// line separating headers from the body).
pub fn write_header_block<W: Write>(
    out: &mut W,
    headers: &[(&str, &str)],
    terminator: Terminator,
) -> io::Result<()> {
    for (name, value) in headers {
        write!(out, "{name}: {value}")?;
        terminator.write_to(out)?;
    }
    terminator.write_to(out)
}
