//! # geocomic
//!
//! Renders the xkcd geohashing comic for any date: a deterministic MD5
//! digest of `(date, Dow Jones opening value)` becomes two fractional
//! coordinate offsets, and the date, index value, hex digest, reference
//! coordinates, and derived decimals are pasted as pre-rendered glyph
//! images onto the comic template.
//!
//! The digest is a pseudo-random byte source only; no cryptographic
//! security is claimed.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use geocomic::prelude::*;
//! use std::fs::File;
//! use std::path::Path;
//!
//! let atlas = GlyphAtlas::load(Path::new("assets"))?;
//! let template = Canvas::decode(File::open("assets/geohashingclean.png")?)?;
//!
//! let seed = SeedInput::new(2005, 5, 26, 10458.68)?;
//! let derived = derive(&seed);
//!
//! let comic = Compositor::new(&atlas)
//!     .render(template, &seed, &derived, BaseCoordinate::default())?;
//! PngEncoder::write_to_file(&comic, "comic.png")?;
//! ```
//!
//! ## Feature Flags
//!
//! - `fetch`: resolve the Dow Jones opening value over HTTP
//! - `cli`: the `geocomic` command-line / CGI binary

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in pixel-pushing code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Coordinate derivation: seed -> digest -> fractions.
pub mod geohash;

/// RGBA canvas and PNG decoding.
pub mod canvas;

/// Glyph atlas built from the 17 character assets.
pub mod atlas;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Field renderers and the compositor.
pub mod fields;

/// Output encoders (PNG, CGI).
pub mod output;

// ============================================================================
// Collaborators
// ============================================================================

/// Market-index resolution (Dow Jones opening value).
pub mod djia;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for geocomic operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust,ignore
/// use geocomic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::atlas::{Glyph, GlyphAtlas, ALPHABET};
    pub use crate::canvas::{Canvas, Rgba};
    pub use crate::djia::{IndexQuote, IndexSource};
    pub use crate::error::{Error, Result};
    pub use crate::fields::{Compositor, Placement};
    pub use crate::geohash::{derive, BaseCoordinate, Derived, DerivedCoordinate, SeedInput};
    pub use crate::output::{CgiEmitter, PngEncoder};
}
