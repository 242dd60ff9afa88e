use std::ffi::OsString;
use std::io::Write;

use clap::Parser;

use crate::error::Result;

pub const BANNER: &str = "Generating massive wakeups... (Ctrl+C to stop)";

/// Generates a continuous stream of 1 µs timer wakeups until interrupted.
///
/// Nothing on the command line changes behavior: every argument, including
/// `--help` and `--version`, is accepted and ignored.
#[derive(Parser, Debug)]
#[command(
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _ignored: Vec<OsString>,
}

/// Writes the startup banner and flushes it so a piped reader sees it
/// before the loop starts.
pub fn print_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    out.flush()?;
    Ok(())
}
