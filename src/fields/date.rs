//! Date row: year, month and day digits.

use super::Placement;
use crate::geohash::SeedInput;

const ROW: i64 = 78;

const YEAR_ORIGIN: i64 = 24;
const YEAR_PITCH: i64 = 12;
const MONTH_ORIGIN: i64 = 88;
const MONTH_PITCH: i64 = 11;
const DAY_ORIGIN: i64 = 120;
const DAY_PITCH: i64 = 12;

/// Lay out the date digits. Fixed pitch, no kerning exceptions.
pub(super) fn layout(seed: &SeedInput) -> Vec<Placement> {
    let mut out = Vec::with_capacity(8);
    segment(&mut out, &format!("{:04}", seed.year()), YEAR_ORIGIN, YEAR_PITCH);
    segment(&mut out, &format!("{:02}", seed.month()), MONTH_ORIGIN, MONTH_PITCH);
    segment(&mut out, &format!("{:02}", seed.day()), DAY_ORIGIN, DAY_PITCH);
    out
}

fn segment(out: &mut Vec<Placement>, text: &str, origin: i64, pitch: i64) {
    for (i, c) in text.chars().enumerate() {
        out.push(Placement::new(c, origin + pitch * i as i64, ROW));
    }
}
