//! Packing 2x4 pixel blocks into Braille dot indices.

use super::binarize::BinaryGrid;
use super::{BLOCK_HEIGHT, BLOCK_WIDTH};

/// Weight contributed by each block position when set.
///
/// Blocks are flattened column by column, so positions map to cells as:
/// ```text
/// [0]=1    [4]=8
/// [1]=2    [5]=16
/// [2]=4    [6]=32
/// [3]=64   [7]=128
/// ```
/// The bottom row carries the high bits, matching Unicode dots 7 and 8.
pub const DOT_WEIGHTS: [u8; 8] = [1, 2, 4, 64, 8, 16, 32, 128];

/// Errors raised while packing a grid.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PackError {
    #[error("grid {width}x{height} is not aligned to 2x4 Braille cells")]
    Unaligned { width: u32, height: u32 },
}

/// Pack one column-major block into its dot index.
///
/// # Example
/// ```
/// use img2braille::braille::block_to_index;
/// let block = [true, false, true, false, true, true, true, false];
/// assert_eq!(block_to_index(&block), 61);
/// ```
pub fn block_to_index(block: &[bool; 8]) -> u8 {
    block
        .iter()
        .zip(DOT_WEIGHTS)
        .filter(|(set, _)| **set)
        .fold(0u8, |index, (_, weight)| index | weight)
}

/// Grid of dot indices addressed as `[bx][by]`, one per Braille cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexGrid {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl IndexGrid {
    /// Width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells (one output line per row).
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, bx: u32, by: u32) -> u8 {
        self.cells[bx as usize * self.height as usize + by as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Pack a block-aligned grid into dot indices.
pub fn pack(grid: &BinaryGrid) -> Result<IndexGrid, PackError> {
    if grid.width() % BLOCK_WIDTH != 0 || grid.height() % BLOCK_HEIGHT != 0 {
        return Err(PackError::Unaligned {
            width: grid.width(),
            height: grid.height(),
        });
    }

    let width = grid.width() / BLOCK_WIDTH;
    let height = grid.height() / BLOCK_HEIGHT;
    let mut cells = Vec::with_capacity(width as usize * height as usize);

    for bx in 0..width {
        for by in 0..height {
            let mut block = [false; 8];
            for sx in 0..BLOCK_WIDTH {
                for sy in 0..BLOCK_HEIGHT {
                    block[(sx * BLOCK_HEIGHT + sy) as usize] =
                        grid.get(bx * BLOCK_WIDTH + sx, by * BLOCK_HEIGHT + sy);
                }
            }
            cells.push(block_to_index(&block));
        }
    }

    Ok(IndexGrid {
        width,
        height,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_to_index_empty() {
        assert_eq!(block_to_index(&[false; 8]), 0);
    }

    #[test]
    fn test_block_to_index_full() {
        assert_eq!(block_to_index(&[true; 8]), 255);
    }

    #[test]
    fn test_block_to_index_single_positions() {
        for (pos, weight) in DOT_WEIGHTS.iter().enumerate() {
            let mut block = [false; 8];
            block[pos] = true;
            assert_eq!(block_to_index(&block), *weight, "position {}", pos);
        }
    }

    #[test]
    fn test_block_to_index_left_column() {
        let block = [true, true, true, true, false, false, false, false];
        assert_eq!(block_to_index(&block), 71);
    }

    #[test]
    fn test_pack_rejects_unaligned() {
        let grid = BinaryGrid::empty(3, 4);
        assert_eq!(
            pack(&grid),
            Err(PackError::Unaligned {
                width: 3,
                height: 4
            })
        );
        assert!(pack(&BinaryGrid::empty(2, 6)).is_err());
    }

    #[test]
    fn test_pack_block_positions() {
        // 4x4 grid: second block has only its bottom-right cell set
        let mut grid = BinaryGrid::empty(4, 4);
        grid.set(3, 3, true);
        let indices = pack(&grid).unwrap();
        assert_eq!((indices.width(), indices.height()), (2, 1));
        assert_eq!(indices.get(0, 0), 0);
        assert_eq!(indices.get(1, 0), 128);
    }

    #[test]
    fn test_pack_column_major_order() {
        // Top-right cell of the block is position 4 (weight 8)
        let mut grid = BinaryGrid::empty(2, 8);
        grid.set(1, 0, true);
        grid.set(0, 7, true);
        let indices = pack(&grid).unwrap();
        assert_eq!(indices.get(0, 0), 8);
        assert_eq!(indices.get(0, 1), 64);
    }

    #[test]
    fn test_pack_empty_grid() {
        let indices = pack(&BinaryGrid::empty(0, 0)).unwrap();
        assert!(indices.is_empty());
        assert_eq!((indices.width(), indices.height()), (0, 0));
    }
}
