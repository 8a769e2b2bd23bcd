//! Handlers for each invocation form.

use clap::CommandFactory;
use std::io::Write;
use std::path::PathBuf;

use super::args::{Args, Invocation};
use crate::convert::{ConvertError, Converter};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 1;
pub const EXIT_ARGUMENT_ERROR: i32 = 2;

/// Rendered help text.
pub fn usage_text() -> String {
    Args::command().render_help().to_string()
}

/// Install the stderr logger.
///
/// `RUST_LOG` wins, then `-v` flags, then the configured level, then `warn`.
pub fn init_logging(verbose: u8, configured: Option<&str>) {
    let default = match verbose {
        0 => configured.unwrap_or("warn"),
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

/// Carry out an invocation, printing results to `out` and diagnostics to `err`.
///
/// Returns the process exit status.
pub fn run<O: Write, E: Write>(
    invocation: &Invocation,
    converter: &Converter,
    out: &mut O,
    err: &mut E,
) -> i32 {
    match invocation {
        Invocation::Usage => {
            let _ = write!(out, "{}", usage_text());
            EXIT_SUCCESS
        }
        Invocation::TooMany { count } => {
            let _ = writeln!(
                err,
                "Error: too many arguments ({} given, at most 2 expected)\n",
                count
            );
            let _ = write!(err, "{}", usage_text());
            EXIT_ARGUMENT_ERROR
        }
        Invocation::Print { input } => match converter.convert(input) {
            Ok(text) => match writeln!(out, "{}", text) {
                Ok(()) => EXIT_SUCCESS,
                Err(source) => report(
                    err,
                    ConvertError::Io {
                        path: PathBuf::from("<stdout>"),
                        source,
                    },
                ),
            },
            Err(e) => report(err, e),
        },
        Invocation::Write { input, output } => match converter.write(input, output) {
            Ok(written) => {
                let _ = writeln!(out, "{}", written);
                EXIT_SUCCESS
            }
            Err(e) => report(err, e),
        },
    }
}

fn report<E: Write>(err: &mut E, error: ConvertError) -> i32 {
    log::debug!("{:?}", error);
    let _ = writeln!(err, "Error: {}", error);
    error.exit_code()
}
