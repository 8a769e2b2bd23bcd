//! Braille encoding pipeline for converting images to text.
//!
//! Every output character covers a 2x4 block of pixels:
//!
//! 1. **Binarization** - zero-valued samples become ink, everything else background
//! 2. **Block packing** - each 2x4 block is packed into a dot index (0-255)
//! 3. **Glyph mapping** - dot index to a Unicode Braille pattern (U+2800-U+28FF)
//! 4. **Text assembly** - glyphs laid out row by row, one line per block row

pub mod binarize;
pub mod glyph;
pub mod pack;
pub mod text;

/// Width of one Braille cell in pixels.
pub const BLOCK_WIDTH: u32 = 2;

/// Height of one Braille cell in pixels.
pub const BLOCK_HEIGHT: u32 = 4;

pub use binarize::{
    binarize, binarize_image, padded_dimensions, BinarizeError, BinaryGrid, Sample,
};
pub use glyph::{map_glyph, BRAILLE_BASE};
pub use pack::{block_to_index, pack, IndexGrid, PackError, DOT_WEIGHTS};
pub use text::assemble;
