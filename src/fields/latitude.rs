//! Reference latitude row, with a mirrored prefix in the final-coordinate
//! panel.

use super::{is_formatting, Placement};

const BASE: i64 = 25;
const ROW: i64 = 168;
const MIRROR_DX: i64 = 110;
const MIRROR_ROW: i64 = 266;
/// How many pasted glyphs reappear in the final-coordinate panel (the
/// integer degrees, which the derived decimals do not replace).
const MIRROR_COUNT: usize = 3;

/// Cursor advance after the character at string position `i`.
fn cursor_delta(c: char, i: usize) -> i64 {
    let mut delta = 10;
    if c == '1' && i > 3 {
        delta -= 5;
    }
    delta += match c {
        '.' => 2,
        '+' | '-' => -1,
        ' ' => -2,
        _ => 0,
    };
    delta
}

/// Lay out the latitude, formatted signed with 6 decimals, width 10.
pub(super) fn layout(lat: f64) -> Vec<Placement> {
    let text = format!("{lat:+10.6}");
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_walk() {
        // "+37.421542": sign and dot shift the cursor but do not paste.
        let placements = layout(37.421542);

        let primary: Vec<Placement> =
            placements.iter().copied().filter(|p| p.y == ROW).collect();
        assert_eq!(
            primary,
            vec![
                Placement::new('3', 34, 168),
                Placement::new('7', 44, 168),
                Placement::new('4', 66, 168),
                Placement::new('2', 76, 168),
                Placement::new('1', 86, 168),
                Placement::new('5', 91, 168),
                Placement::new('4', 101, 168),
                Placement::new('2', 111, 168),
            ]
        );
    }

    #[test]
    fn test_mirrored_prefix_count() {
        let placements = layout(37.421542);

        let primary: Vec<&Placement> = placements.iter().filter(|p| p.y == ROW).collect();
        let mirrored: Vec<Placement> = placements
            .iter()
            .copied()
            .filter(|p| p.y == MIRROR_ROW)
            .collect();

        assert_eq!(primary.len(), 8);
        assert_eq!(
            mirrored,
            vec![
                Placement::new('3', 144, 266),
                Placement::new('7', 154, 266),
                Placement::new('4', 176, 266),
            ]
        );
    }

    #[test]
    fn test_negative_latitude_sign_not_pasted() {
        let placements = layout(-37.421542);
        assert!(placements.iter().all(|p| p.ch != '-'));
        // The minus is 1px narrower than a digit cell.
        assert_eq!(placements[0], Placement::new('3', 34, 168));
    }

    #[test]
    fn test_narrow_one_only_after_decimal_positions() {
        // '1' in the integer part keeps the full 10px pitch.
        let placements = layout(13.000001);
        let primary: Vec<&Placement> = placements.iter().filter(|p| p.y == ROW).collect();
        assert_eq!(primary[0].ch, '1');
        assert_eq!(primary[1].x - primary[0].x, 10);
    }
}
