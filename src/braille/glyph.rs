//! Dot index to Unicode Braille pattern.

/// Braille base character (U+2800, empty braille pattern).
pub const BRAILLE_BASE: char = '\u{2800}';

/// Map a dot index to its Braille pattern character (`U+2800 + index`).
pub fn map_glyph(index: u8) -> char {
    char::from_u32(BRAILLE_BASE as u32 + index as u32).unwrap_or(BRAILLE_BASE)
}
