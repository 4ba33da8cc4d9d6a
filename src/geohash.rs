//! Coordinate derivation: seed string -> 128-bit digest -> two fractions.
//!
//! Implements the xkcd geohashing algorithm. The date and the Dow Jones
//! opening value are formatted into a canonical seed string, hashed with
//! MD5 (used purely as a pseudo-random byte source, not for security),
//! and the two 8-byte halves of the digest become the fractional parts
//! of the day's coordinates.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use md5::{Digest as _, Md5};

/// Divisor for the top 53 bits of a digest half.
const TWO_POW_53: f64 = 9_007_199_254_740_992.0;

/// Validated seed components for one comic.
///
/// Immutable; used only to build the canonical seed string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedInput {
    year: i32,
    month: u32,
    day: u32,
    index_value: f64,
}

impl SeedInput {
    /// Create a seed from date components and a market-index value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeed`] if the components do not form a
    /// valid calendar date or the index value is non-finite. An
    /// "unavailable" sentinel such as `-1.0` is a valid index value.
    pub fn new(year: i32, month: u32, day: u32, index_value: f64) -> Result<Self> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(Error::InvalidSeed(format!(
                "{year:04}-{month:02}-{day:02} is not a calendar date"
            )));
        }
        if !index_value.is_finite() {
            return Err(Error::InvalidSeed(format!(
                "index value {index_value} is not finite"
            )));
        }
        Ok(Self {
            year,
            month,
            day,
            index_value,
        })
    }

    /// Create a seed from a [`NaiveDate`] and a market-index value.
    pub fn from_date(date: NaiveDate, index_value: f64) -> Result<Self> {
        use chrono::Datelike;
        Self::new(date.year(), date.month(), date.day(), index_value)
    }

    /// Year component.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month component (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Day-of-month component.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Market-index value (may be the `-1.0` unavailable sentinel).
    #[must_use]
    pub const fn index_value(&self) -> f64 {
        self.index_value
    }

    /// The canonical seed string, e.g. `"2005-05-26-10458.68"`.
    ///
    /// Zero-padded date components, index value fixed at 2 decimals.
    #[must_use]
    pub fn seed_string(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}-{:.2}",
            self.year, self.month, self.day, self.index_value
        )
    }
}

/// 16-byte digest of a seed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedDigest([u8; 16]);

impl SeedDigest {
    /// Hash the canonical seed string of `seed`.
    #[must_use]
    pub fn of_seed(seed: &SeedInput) -> Self {
        let digest = Md5::digest(seed.seed_string().as_bytes());
        Self(digest.into())
    }

    /// Wrap 16 raw digest bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// The digest as 32 lowercase hexadecimal characters.
    #[must_use]
    pub fn to_hex(&self) -> String {
        use std::fmt::Write;
        let mut hex = String::with_capacity(32);
        for byte in self.0 {
            let _ = write!(hex, "{byte:02x}");
        }
        hex
    }

    /// Latitude fraction: bytes 0..8 as a big-endian u64, scaled to `[0, 1)`.
    #[must_use]
    pub fn lat_fraction(&self) -> f64 {
        let half = [
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5], self.0[6], self.0[7],
        ];
        half_to_fraction(u64::from_be_bytes(half))
    }

    /// Longitude fraction: bytes 8..16 as a big-endian u64, scaled to `[0, 1)`.
    #[must_use]
    pub fn lon_fraction(&self) -> f64 {
        let half = [
            self.0[8], self.0[9], self.0[10], self.0[11], self.0[12], self.0[13], self.0[14],
            self.0[15],
        ];
        half_to_fraction(u64::from_be_bytes(half))
    }
}

/// Scale a digest half to `[0, 1)`.
///
/// Keeps the top 53 bits so the conversion to f64 is exact and an
/// all-ones half stays strictly below 1.0 (nearest-rounding the full
/// 64-bit value against 2^64 would round up to exactly 1.0).
fn half_to_fraction(half: u64) -> f64 {
    ((half >> 11) as f64) / TWO_POW_53
}

/// Two coordinate fractions derived from one digest.
///
/// Both values are deterministic functions of the digest alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedCoordinate {
    /// Latitude fraction in `[0, 1)`.
    pub lat_fraction: f64,
    /// Longitude fraction in `[0, 1)`.
    pub lon_fraction: f64,
}

impl DerivedCoordinate {
    /// First 6 decimal digits of the latitude fraction, truncated.
    #[must_use]
    pub fn lat_digits(&self) -> String {
        fraction_digits(self.lat_fraction)
    }

    /// First 6 decimal digits of the longitude fraction, truncated.
    #[must_use]
    pub fn lon_digits(&self) -> String {
        fraction_digits(self.lon_fraction)
    }
}

/// First 6 digits after the decimal point of a fraction in `[0, 1)`.
///
/// Truncates rather than rounds: `0.1234567` yields `"123456"`.
#[must_use]
pub fn fraction_digits(fraction: f64) -> String {
    format!("{:06}", (fraction * 1_000_000.0) as u64)
}

/// Caller-supplied reference point for the "current location" fields.
///
/// Display-only: it is never combined arithmetically with
/// [`DerivedCoordinate`]; the two are rendered side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseCoordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Default for BaseCoordinate {
    fn default() -> Self {
        // Googleplex, the reference point of xkcd 426.
        Self {
            lat: 37.421542,
            lon: -122.085589,
        }
    }
}

/// Output of [`derive`]: hex digest plus the two coordinate fractions.
#[derive(Debug, Clone, PartialEq)]
pub struct Derived {
    /// 32 lowercase hexadecimal characters.
    pub hex_digest: String,
    /// Raw digest bytes.
    pub digest: SeedDigest,
    /// Coordinate fractions from the two digest halves.
    pub coordinate: DerivedCoordinate,
}

/// Derive the hex digest and coordinate fractions for a seed.
///
/// Pure and total for a validated [`SeedInput`]: equal seeds always
/// yield bit-identical output.
#[must_use]
pub fn derive(seed: &SeedInput) -> Derived {
    let digest = SeedDigest::of_seed(seed);
    Derived {
        hex_digest: digest.to_hex(),
        digest,
        coordinate: DerivedCoordinate {
            lat_fraction: digest.lat_fraction(),
            lon_fraction: digest.lon_fraction(),
        },
    }
}
