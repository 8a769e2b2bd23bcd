//! Image samples to a block-aligned ink/background grid.

use image::DynamicImage;

use super::{BLOCK_HEIGHT, BLOCK_WIDTH};

/// A single pixel sample as yielded by the decoder.
///
/// Only one question is ever asked of a sample: is it the zero value?
/// Zero samples are treated as ink (black on a light background).
pub trait Sample {
    fn is_zero(&self) -> bool;
}

impl Sample for u8 {
    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl Sample for u16 {
    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl Sample for f32 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

/// Multi-channel samples are zero only when every channel is zero.
impl<T: Sample, const N: usize> Sample for [T; N] {
    fn is_zero(&self) -> bool {
        self.iter().all(Sample::is_zero)
    }
}

/// Errors raised while binarizing raw samples.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BinarizeError {
    #[error("expected {expected} samples for a {width}x{height} image, got {actual}")]
    SampleCountMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Boolean grid addressed as `[x][y]`, padded to whole Braille cells.
///
/// `true` means ink. Cells are stored column by column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGrid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl BinaryGrid {
    /// Create an all-background grid of the given size.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Build a padded grid for a `width`x`height` image, asking `is_ink`
    /// for every pixel inside the original extent.
    ///
    /// Padding cells are never passed to `is_ink` and stay background.
    pub fn from_fn<F>(width: u32, height: u32, mut is_ink: F) -> Self
    where
        F: FnMut(u32, u32) -> bool,
    {
        let (fix_w, fix_h) = padded_dimensions(width, height);
        let mut grid = Self::empty(fix_w, fix_h);
        for x in 0..width {
            for y in 0..height {
                if is_ink(x, y) {
                    grid.set(x, y, true);
                }
            }
        }
        grid
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cell at column `x`, row `y`. Out-of-range reads are background.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[self.offset(x, y)]
    }

    /// Panics if `(x, y)` is outside the grid.
    pub fn set(&mut self, x: u32, y: u32, ink: bool) {
        let offset = self.offset(x, y);
        self.cells[offset] = ink;
    }

    /// Number of ink cells.
    pub fn ink_count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        x as usize * self.height as usize + y as usize
    }
}

/// Round image dimensions up to whole Braille cells.
///
/// # Example
/// ```
/// use img2braille::braille::padded_dimensions;
/// assert_eq!(padded_dimensions(5, 9), (6, 12));
/// assert_eq!(padded_dimensions(0, 0), (0, 0));
/// ```
pub fn padded_dimensions(width: u32, height: u32) -> (u32, u32) {
    (
        width.div_ceil(BLOCK_WIDTH) * BLOCK_WIDTH,
        height.div_ceil(BLOCK_HEIGHT) * BLOCK_HEIGHT,
    )
}

/// Binarize row-major samples (`index = width * y + x`).
///
/// A cell is ink when its sample is zero. The result is padded to whole
/// Braille cells with background.
pub fn binarize<S: Sample>(
    samples: &[S],
    width: u32,
    height: u32,
) -> Result<BinaryGrid, BinarizeError> {
    let expected = width as usize * height as usize;
    if samples.len() != expected {
        return Err(BinarizeError::SampleCountMismatch {
            width,
            height,
            expected,
            actual: samples.len(),
        });
    }

    let stride = width as usize;
    Ok(BinaryGrid::from_fn(width, height, |x, y| {
        samples[stride * y as usize + x as usize].is_zero()
    }))
}

/// Binarize a decoded image.
///
/// Pixels are compared at full precision on their colour channels; alpha is
/// ignored. A pixel is ink only when every colour channel is exactly zero.
pub fn binarize_image(image: &DynamicImage) -> BinaryGrid {
    let rgb = image.to_rgb32f();
    BinaryGrid::from_fn(rgb.width(), rgb.height(), |x, y| {
        rgb.get_pixel(x, y).0.is_zero()
    })
}
