//! Error types for geocomic operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in geocomic operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG decoding error (template or glyph asset).
    #[error("PNG decoding error: {0}")]
    PngDecoding(#[from] png::DecodingError),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// A glyph or template asset is absent or unreadable.
    ///
    /// Fatal at load time; never retried.
    #[error("missing asset {name}: {reason}")]
    AssetMissing {
        /// Asset file name.
        name: String,
        /// Underlying cause.
        reason: String,
    },

    /// Seed components do not form a valid calendar date, or the index
    /// value is non-finite.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    /// A character outside the glyph alphabet was looked up.
    #[error("no glyph for character {0:?}")]
    UnknownGlyph(char),

    /// Glyph assets do not share a uniform pixel height.
    #[error("glyph {glyph:?} is {found}px tall, expected {expected}px")]
    GlyphHeightMismatch {
        /// Height of the first glyph loaded.
        expected: u32,
        /// Height of the offending glyph.
        found: u32,
        /// Offending alphabet character.
        glyph: char,
    },

    /// Market-index lookup failed at the transport or parse level.
    ///
    /// A quote that is merely missing for a date is not an error; see
    /// [`IndexQuote::Unavailable`](crate::djia::IndexQuote::Unavailable).
    #[cfg(feature = "fetch")]
    #[error("market index fetch failed: {0}")]
    IndexFetch(String),
}
