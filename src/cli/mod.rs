//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing, dispatch by argument count
//! and the handlers that print or write the converted text.

mod args;
mod commands;

pub use args::{Args, Invocation};
pub use commands::{
    init_logging, run, usage_text, EXIT_ARGUMENT_ERROR, EXIT_CONFIG_ERROR, EXIT_SUCCESS,
};
