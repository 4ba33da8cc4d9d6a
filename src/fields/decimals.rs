//! Derived coordinate decimals.
//!
//! The first six fractional digits of each derived offset appear twice:
//! once next to the hash panel and once in the final-coordinate panel,
//! where they complete the mirrored integer degrees from the latitude
//! and longitude rows.

use super::Placement;
use crate::geohash::DerivedCoordinate;

const PITCH: i64 = 10;

const LAT_UPPER: (i64, i64) = (300, 174);
const LAT_LOWER: (i64, i64) = (176, 267);
const LON_UPPER: (i64, i64) = (450, 174);
const LON_LOWER: (i64, i64) = (335, 269);

/// Lay out both digit blocks at fixed pitch, each pasted twice.
pub(super) fn layout(coordinate: &DerivedCoordinate) -> Vec<Placement> {
    let mut out = Vec::with_capacity(24);
    block(&mut out, &coordinate.lat_digits(), LAT_UPPER, LAT_LOWER);
    block(&mut out, &coordinate.lon_digits(), LON_UPPER, LON_LOWER);
    out
}

fn block(out: &mut Vec<Placement>, digits: &str, upper: (i64, i64), lower: (i64, i64)) {
    for (i, c) in digits.chars().enumerate() {
        let i = i as i64;
        out.push(Placement::new(c, upper.0 + PITCH * i, upper.1));
        out.push(Placement::new(c, lower.0 + PITCH * i, lower.1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_blocks() {
        let coordinate = DerivedCoordinate {
            lat_fraction: 0.857_713_267_707_002_3,
            lon_fraction: 0.544_543_069_559_282_1,
        };
        let placements = layout(&coordinate);
        assert_eq!(placements.len(), 24);

        // Latitude digits "857713", pasted in both panels.
        assert_eq!(placements[0], Placement::new('8', 300, 174));
        assert_eq!(placements[1], Placement::new('8', 176, 267));
        assert_eq!(placements[10], Placement::new('3', 350, 174));
        assert_eq!(placements[11], Placement::new('3', 226, 267));

        // Longitude digits "544543".
        assert_eq!(placements[12], Placement::new('5', 450, 174));
        assert_eq!(placements[13], Placement::new('5', 335, 269));
        assert_eq!(placements[22], Placement::new('3', 500, 174));
        assert_eq!(placements[23], Placement::new('3', 385, 269));
    }

    #[test]
    fn test_zero_fraction_pads_with_zeros() {
        let coordinate = DerivedCoordinate {
            lat_fraction: 0.0,
            lon_fraction: 0.5,
        };
        let placements = layout(&coordinate);
        assert!(placements[..12].iter().all(|p| p.ch == '0'));
        assert_eq!(placements[12].ch, '5');
        assert!(placements[14..].iter().all(|p| p.ch == '0'));
    }
}
