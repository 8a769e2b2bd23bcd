//! Unit tests for the Braille encoding pipeline.
//!
//! These tests verify the pipeline properties end to end on raw samples:
//! - Padding to whole Braille cells
//! - Dot index packing (range and bijection)
//! - Known block vectors
//! - Output shape for all-ink images

use img2braille::braille::*;
use std::collections::HashSet;

/// Run binarize -> pack -> assemble on raw luminance samples.
fn render(samples: &[u8], width: u32, height: u32) -> String {
    let grid = binarize(samples, width, height).unwrap();
    let indices = pack(&grid).unwrap();
    assemble(&indices, "\n")
}

/// Expand an 8-bit pattern into a block, bit `i` becoming position `i`.
fn block_from_bits(bits: u8) -> [bool; 8] {
    let mut block = [false; 8];
    for (i, cell) in block.iter_mut().enumerate() {
        *cell = bits & (1 << i) != 0;
    }
    block
}

// ==================== Padding Tests ====================

#[test]
fn test_padding_dimensions_for_small_images() {
    for width in 0..10u32 {
        for height in 0..13u32 {
            let (fix_w, fix_h) = padded_dimensions(width, height);
            assert_eq!(fix_w, width.div_ceil(2) * 2);
            assert_eq!(fix_h, height.div_ceil(4) * 4);
            assert_eq!(fix_w % BLOCK_WIDTH, 0);
            assert_eq!(fix_h % BLOCK_HEIGHT, 0);
        }
    }
}

#[test]
fn test_padding_cells_are_background() {
    let (width, height) = (5, 7);
    let grid = binarize(&vec![0u8; 35], width, height).unwrap();
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if x >= width || y >= height {
                assert!(!grid.get(x, y), "padding cell ({}, {}) is ink", x, y);
            } else {
                assert!(grid.get(x, y));
            }
        }
    }
}

// ==================== Packing Tests ====================

#[test]
fn test_block_to_index_is_bijection() {
    let indices: HashSet<u8> = (0..=255u8)
        .map(|bits| block_to_index(&block_from_bits(bits)))
        .collect();
    assert_eq!(indices.len(), 256);
}

#[test]
fn test_dot_weights_cover_every_bit() {
    let total: u32 = DOT_WEIGHTS.iter().map(|w| *w as u32).sum();
    assert_eq!(total, 255);
}

// ==================== Known Vector Tests ====================

#[test]
fn test_blank_block() {
    let index = block_to_index(&[false; 8]);
    assert_eq!(index, 0);
    assert_eq!(map_glyph(index), '\u{2800}');
}

#[test]
fn test_full_block() {
    let index = block_to_index(&[true; 8]);
    assert_eq!(index, 255);
    assert_eq!(map_glyph(index), '\u{28FF}');
}

#[test]
fn test_mixed_block() {
    let block = [true, false, true, false, true, true, true, false];
    assert_eq!(block_to_index(&block), 1 + 4 + 8 + 16 + 32);
}

// ==================== Shape Tests ====================

#[test]
fn test_all_ink_shape() {
    for (width, height) in [(1u32, 1u32), (2, 4), (3, 5), (9, 2), (10, 17)] {
        let samples = vec![0u8; (width * height) as usize];
        let grid = binarize(&samples, width, height).unwrap();
        let indices = pack(&grid).unwrap();

        let cols = width.div_ceil(2);
        let rows = height.div_ceil(4);
        assert_eq!((indices.width(), indices.height()), (cols, rows));

        let text = assemble(&indices, "\n");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), rows as usize);
        for line in lines {
            assert_eq!(line.chars().count(), cols as usize);
        }
    }
}

#[test]
fn test_all_ink_aligned_is_full_cells() {
    let indices = pack(&binarize(&[0u8; 48], 4, 12).unwrap()).unwrap();
    for bx in 0..indices.width() {
        for by in 0..indices.height() {
            assert_eq!(indices.get(bx, by), 255);
        }
    }
}

#[test]
fn test_zero_size_image() {
    assert_eq!(render(&[], 0, 0), "");
}

#[test]
fn test_pipeline_is_deterministic() {
    let samples: Vec<u8> = (0..60u32).map(|i| (i % 3) as u8).collect();
    assert_eq!(render(&samples, 6, 10), render(&samples, 6, 10));
}

#[test]
fn test_left_column_black() {
    // 4x4: column 0 black, columns 1-3 white
    let mut samples = [255u8; 16];
    for y in 0..4 {
        samples[y * 4] = 0;
    }
    assert_eq!(render(&samples, 4, 4), "\u{2847}\u{2800}\n");
}

#[test]
fn test_left_block_black() {
    // 4x4: left 2x4 block black, right block white
    let mut samples = [255u8; 16];
    for y in 0..4 {
        samples[y * 4] = 0;
        samples[y * 4 + 1] = 0;
    }
    assert_eq!(render(&samples, 4, 4), "\u{28FF}\u{2800}\n");
}
