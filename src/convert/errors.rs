//! Error types for conversion and output.

use std::path::PathBuf;

use crate::braille::PackError;

/// Errors that can occur while converting an image or writing the result.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Input could not be opened or decoded
    #[error("Problem opening image file '{}': {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Conversion produced no text, so nothing was written
    #[error("No braille produced from '{}', nothing written", .path.display())]
    EmptyResult { path: PathBuf },

    /// Output file could not be created or written
    #[error("Problem saving to file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Decoded pixels did not fit the grid pipeline
    #[error("Problem converting image data: {0}")]
    Pipeline(#[from] PackError),
}

impl ConvertError {
    /// Process exit status for this failure.
    ///
    /// Pipeline failures share the image-load status.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::ImageLoad { .. } | ConvertError::Pipeline(_) => 3,
            ConvertError::EmptyResult { .. } => 4,
            ConvertError::Io { .. } => 5,
        }
    }
}
