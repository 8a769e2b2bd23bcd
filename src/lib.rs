//! img2braille library crate.
//!
//! Converts raster images into text made of Unicode Braille patterns, one
//! character per 2x4 block of pixels.

pub mod braille;
pub mod cli;
pub mod config;
pub mod convert;

pub use convert::{convert, write, ConvertError, ConvertOptions, Converter, WriteReport};
