//! Lay out Braille glyphs as lines of text.

use super::glyph::map_glyph;
use super::pack::IndexGrid;

/// Assemble an index grid into text, top to bottom and left to right.
///
/// Every row is followed by `line_end`, including the last one.
pub fn assemble(grid: &IndexGrid, line_end: &str) -> String {
    let rows = grid.height() as usize;
    let cols = grid.width() as usize;
    // Braille patterns are 3 bytes in UTF-8
    let mut text = String::with_capacity(rows * (cols * 3 + line_end.len()));

    for by in 0..grid.height() {
        for bx in 0..grid.width() {
            text.push(map_glyph(grid.get(bx, by)));
        }
        text.push_str(line_end);
    }

    text
}
