//! CLI argument parsing with clap.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Convert an image into Unicode Braille text
#[derive(Parser, Debug)]
#[command(name = "img2braille")]
#[command(version, about = "Convert an image into Unicode Braille text", long_about = None)]
#[command(after_help = "EXAMPLES:
    img2braille image.gif              # Print braille to stdout
    img2braille image.gif text.txt     # Write braille to text.txt

Black (zero-valued) pixels become dots, everything else stays blank.")]
pub struct Args {
    /// Input image (GIF, PNG, JPEG, ...)
    pub input: Option<PathBuf>,

    /// Output text file, overwritten if it exists
    pub output: Option<PathBuf>,

    /// Arguments beyond input and output are rejected
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What the positional arguments ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No input given: show usage
    Usage,
    /// Convert and print to stdout
    Print { input: PathBuf },
    /// Convert and write to a file
    Write { input: PathBuf, output: PathBuf },
    /// More positional arguments than input and output
    TooMany { count: usize },
}

impl Invocation {
    pub fn from_args(args: &Args) -> Self {
        match (&args.input, &args.output) {
            _ if !args.extra.is_empty() => Invocation::TooMany {
                count: 2 + args.extra.len(),
            },
            (None, _) => Invocation::Usage,
            (Some(input), None) => Invocation::Print {
                input: input.clone(),
            },
            (Some(input), Some(output)) => Invocation::Write {
                input: input.clone(),
                output: output.clone(),
            },
        }
    }
}
