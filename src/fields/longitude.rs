//! Reference longitude row, with a mirrored prefix in the
//! final-coordinate panel.

use super::{is_formatting, Placement};

const BASE: i64 = 143;
const ROW: i64 = 169;
const MIRROR_DX: i64 = 138;
const MIRROR_ROW: i64 = 269;
/// Longitudes run to three integer digits, so one more glyph than the
/// latitude mirrors into the final-coordinate panel.
const MIRROR_COUNT: usize = 4;

/// Cursor advance after the character at string position `i`.
///
/// Evaluated exactly once per character. An earlier rendition of this
/// field summed three identical evaluations as `d1 + d2 - d3`, which is
/// algebraically just `d1`; the regression test below pins that
/// equivalence.
fn cursor_delta(c: char, i: usize) -> i64 {
    let mut delta = 10;
    if c == '1' && i > 4 {
        delta -= 5;
    }
    delta += match c {
        '.' => 3,
        '-' => -1,
        '+' | ' ' => -2,
        _ => 0,
    };
    delta
}

/// Lay out the longitude, formatted signed with 6 decimals, width 11.
pub(super) fn layout(lon: f64) -> Vec<Placement> {
    let text = format!("{lon:+11.6}");
    let mut out = Vec::with_capacity(text.len() + MIRROR_COUNT);
    let mut cursor = BASE;
    let mut pasted = 0;
    for (i, c) in text.chars().enumerate() {
        if !is_formatting(c) {
            out.push(Placement::new(c, cursor, ROW));
            if pasted < MIRROR_COUNT {
                out.push(Placement::new(c, cursor + MIRROR_DX, MIRROR_ROW));
            }
            pasted += 1;
        }
        cursor += cursor_delta(c, i);
    }
    out
}
