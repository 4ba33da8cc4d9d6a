//! Hex digest rows.
//!
//! The 32 digest characters are drawn twice each. Unlike the fixed-pitch
//! fields, the cursor here advances by each glyph's own rendered width,
//! since the hex glyphs are not uniform.

use super::Placement;
use crate::atlas::GlyphAtlas;
use crate::error::Result;

const TOP_ROW: i64 = 82;
const BOTTOM_ROW: i64 = 129;
/// X origin of the first half on both rows (bottom row shifted left).
const FIRST_X: i64 = 301;
const BOTTOM_SHIFT: i64 = 9;
/// Gap between the two halves on the top row.
const HALF_GAP: i64 = 14;
/// X origin of the second half's bottom row (independent cursor).
const SECOND_BOTTOM_X: i64 = 466;

/// Lay out both halves of the digest with variable-width kerning.
pub(super) fn layout(hex_digest: &str, atlas: &GlyphAtlas) -> Result<Vec<Placement>> {
    let chars: Vec<char> = hex_digest.chars().collect();
    debug_assert_eq!(chars.len(), 32);

    let mut out = Vec::with_capacity(64);

    let mut cursor = FIRST_X;
    for &c in &chars[0..16] {
        out.push(Placement::new(c, cursor, TOP_ROW));
        out.push(Placement::new(c, cursor - BOTTOM_SHIFT, BOTTOM_ROW));
        cursor += i64::from(atlas.glyph_width(c)?);
    }

    // Second half: the top row continues the same cursor past a fixed
    // gap; the bottom row restarts from its own origin.
    cursor += HALF_GAP;
    let mut bottom_cursor = SECOND_BOTTOM_X;
    for &c in &chars[16..32] {
        out.push(Placement::new(c, cursor, TOP_ROW));
        out.push(Placement::new(c, bottom_cursor, BOTTOM_ROW));
        let width = i64::from(atlas.glyph_width(c)?);
        cursor += width;
        bottom_cursor += width;
    }

    Ok(out)
}
