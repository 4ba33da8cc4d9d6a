//! Market-index row: the Dow Jones opening value.

use super::{is_formatting, Placement};

const BASE: i64 = 165;
const PITCH: i64 = 10;
const ROW: i64 = 78;

/// Lay out the index value, formatted to width 8 with 2 decimals.
///
/// The running offset loses 3px right after the leading-digit boundary
/// (i == 1) and again right after the decimal point (i == 5), which
/// compensates for narrower leading glyphs in the template art.
pub(super) fn layout(index_value: f64) -> Vec<Placement> {
    let text = format!("{index_value:8.2}");
    let mut out = Vec::with_capacity(text.len());
    let mut correction: i64 = 0;
    for (i, c) in text.chars().enumerate() {
        if i == 1 || i == 5 {
            correction -= 3;
        }
        if !is_formatting(c) {
            out.push(Placement::new(c, BASE + correction + PITCH * i as i64, ROW));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_positions() {
        let placements = layout(10458.68);
        assert_eq!(
            placements,
            vec![
                Placement::new('1', 165, 78),
                Placement::new('0', 172, 78),
                Placement::new('4', 182, 78),
                Placement::new('5', 192, 78),
                Placement::new('8', 202, 78),
                // '.' at i == 5 shifts but is not pasted
                Placement::new('6', 219, 78),
                Placement::new('8', 229, 78),
            ]
        );
    }

    #[test]
    fn test_unavailable_sentinel_renders_digits_only() {
        // "   -1.00": spaces and the sign shift the cursor, digits paste.
        let placements = layout(-1.0);
        let chars: String = placements.iter().map(|p| p.ch).collect();
        assert_eq!(chars, "100");
        assert_eq!(placements[0], Placement::new('1', 202, 78));
    }
}
