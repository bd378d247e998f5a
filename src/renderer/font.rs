//! Monospace bitmap font
//!
//! Glyphs come from the `font8x8` basic set: 8 rows per glyph, bit 0 is
//! the leftmost column. Rows 0..7 sit above the baseline and row 7 holds
//! descenders. Characters without a glyph draw as a solid box.

use font8x8::{BASIC_FONTS, UnicodeFonts};

use crate::sim::Rect;

pub const GLYPH_SIZE: u32 = 8;
/// Rows above the baseline
pub const GLYPH_ASCENT: u32 = 7;
/// Horizontal advance per character
pub const CELL_WIDTH: f32 = GLYPH_SIZE as f32;

const MISSING: [u8; 8] = [0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x00];

/// Row masks for a character, if the font has it
pub fn glyph(c: char) -> Option<[u8; 8]> {
    BASIC_FONTS.get(c)
}

/// Lay out a line of text as filled rectangles.
///
/// Horizontal runs of lit pixels in a glyph row are merged into one rect.
pub fn layout_text(text: &str, x: f32, baseline: f32) -> Vec<Rect> {
    let top = baseline - GLYPH_ASCENT as f32;
    let mut rects = Vec::new();

    for (i, c) in text.chars().enumerate() {
        let rows = glyph(c).unwrap_or(MISSING);
        let cell_x = x + i as f32 * CELL_WIDTH;

        for (row, &mask) in rows.iter().enumerate() {
            let y = top + row as f32;
            let mut col = 0;
            while col < GLYPH_SIZE {
                if !lit(mask, col) {
                    col += 1;
                    continue;
                }
                let start = col;
                while col < GLYPH_SIZE && lit(mask, col) {
                    col += 1;
                }
                rects.push(Rect::new(
                    cell_x + start as f32,
                    y,
                    (col - start) as f32,
                    1.0,
                ));
            }
        }
    }

    rects
}

#[inline]
fn lit(mask: u8, col: u32) -> bool {
    mask & (1 << col) != 0
}
