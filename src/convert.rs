//! Image to Braille text conversion driver.
//!
//! Loads an image, runs it through the [`crate::braille`] pipeline and
//! returns or writes the resulting text.

mod errors;

pub use errors::ConvertError;

use image::DynamicImage;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::braille;

/// Default line terminator appended after each row of glyphs.
pub const DEFAULT_LINE_END: &str = "\n";

/// Options for a conversion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Terminator appended after every row before the final trim
    pub line_end: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            line_end: DEFAULT_LINE_END.to_string(),
        }
    }
}

/// Outcome of a successful [`Converter::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    /// File the text was written to
    pub path: PathBuf,
    /// Number of lines of Braille written
    pub lines: usize,
    /// Number of bytes written
    pub bytes: usize,
}

impl fmt::Display for WriteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File '{}' written to disk ({} lines, {} bytes).",
            self.path.display(),
            self.lines,
            self.bytes
        )
    }
}

/// Runs the binarize -> pack -> assemble pipeline with fixed options.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert an already decoded image.
    ///
    /// Trailing whitespace (the last terminator and any blank rows) is
    /// trimmed from the result.
    pub fn convert_image(&self, image: &DynamicImage) -> Result<String, ConvertError> {
        let grid = braille::binarize_image(image);
        log::debug!(
            "Binarized {}x{} image into {}x{} grid ({} ink cells)",
            image.width(),
            image.height(),
            grid.width(),
            grid.height(),
            grid.ink_count()
        );

        let indices = braille::pack(&grid)?;
        log::debug!("Packed {}x{} braille cells", indices.width(), indices.height());

        let mut text = braille::assemble(&indices, &self.options.line_end);
        text.truncate(text.trim_end().len());
        Ok(text)
    }

    /// Load an image from `input` and convert it.
    pub fn convert(&self, input: impl AsRef<Path>) -> Result<String, ConvertError> {
        let input = input.as_ref();
        log::info!("Loading image: {}", input.display());

        let image = image::open(input).map_err(|source| ConvertError::ImageLoad {
            path: input.to_path_buf(),
            source,
        })?;

        self.convert_image(&image)
    }

    /// Convert `input` and write the text to `output`, replacing its contents.
    ///
    /// The output path is left untouched when loading fails or the
    /// conversion yields no text.
    pub fn write(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<WriteReport, ConvertError> {
        let input = input.as_ref();
        let output = output.as_ref();

        let text = self.convert(input)?;
        store(input, output, &text)
    }
}

/// Write converted text to `output`, refusing to write an empty result.
fn store(input: &Path, output: &Path, text: &str) -> Result<WriteReport, ConvertError> {
    if text.is_empty() {
        log::warn!("No braille produced from {}, skipping write", input.display());
        return Err(ConvertError::EmptyResult {
            path: input.to_path_buf(),
        });
    }

    std::fs::write(output, text).map_err(|source| ConvertError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    let report = WriteReport {
        path: output.to_path_buf(),
        lines: text.lines().count(),
        bytes: text.len(),
    };
    log::info!("Wrote {} bytes to {}", report.bytes, output.display());
    Ok(report)
}

/// Convert `input` with default options.
pub fn convert(input: impl AsRef<Path>) -> Result<String, ConvertError> {
    Converter::default().convert(input)
}

/// Convert `input` with default options and write the text to `output`.
pub fn write(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<WriteReport, ConvertError> {
    Converter::default().write(input, output)
}
