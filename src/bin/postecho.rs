use cgiprobe::probes::{PostProbe, ProbeConfig};
use color_eyre::eyre::{Result, WrapErr};
use std::io;

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging; standard output belongs to the harness, so
    // diagnostics go to standard error
    tracing_subscriber::fmt()
        .with_env_filter("cgiprobe=info")
        .with_writer(io::stderr)
        .init();

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    let probe = PostProbe::new(ProbeConfig::default());
    probe
        .run(&mut input, &mut out)
        .wrap_err("Failed to echo POST body")
}
