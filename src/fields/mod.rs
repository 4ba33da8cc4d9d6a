//! Field renderers and the compositor.
//!
//! Each field module computes a pure glyph layout: a list of
//! [`Placement`]s, one per pasted glyph, at absolute pixel coordinates
//! (origin top-left, y growing downward). The [`Compositor`] runs the
//! six layouts over one canvas and pastes the glyphs.
//!
//! The general pattern: walk a formatted string left to right with a
//! running horizontal cursor; paste digit glyphs, skip formatting
//! characters (space, sign, decimal point) while still letting them
//! shift the cursor so later glyphs stay aligned.

mod date;
mod decimals;
mod hash;
mod index;
mod latitude;
mod longitude;

use crate::atlas::GlyphAtlas;
use crate::canvas::Canvas;
use crate::error::Result;
use crate::geohash::{BaseCoordinate, Derived, SeedInput};
use tracing::debug;

/// One glyph paste at an absolute pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Alphabet character whose glyph is pasted.
    pub ch: char,
    /// X coordinate of the glyph's top-left corner.
    pub x: i64,
    /// Y coordinate of the glyph's top-left corner.
    pub y: i64,
}

impl Placement {
    /// Create a placement.
    #[must_use]
    pub const fn new(ch: char, x: i64, y: i64) -> Self {
        Self { ch, x, y }
    }
}

/// True for characters that shift the cursor but are never pasted.
pub(crate) const fn is_formatting(c: char) -> bool {
    matches!(c, ' ' | '+' | '-' | '.')
}

/// Composes the six comic fields onto a template canvas.
///
/// Holds a shared reference to the glyph atlas; one compositor can
/// serve any number of renders.
#[derive(Debug, Clone, Copy)]
pub struct Compositor<'a> {
    atlas: &'a GlyphAtlas,
}

impl<'a> Compositor<'a> {
    /// Create a compositor over a glyph atlas.
    #[must_use]
    pub const fn new(atlas: &'a GlyphAtlas) -> Self {
        Self { atlas }
    }

    /// Render one comic: paste all six fields onto `template`.
    ///
    /// The template is consumed and returned as the finished image; no
    /// partial image is ever exposed. The field layouts only paste and
    /// never read the canvas back, so their order is irrelevant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownGlyph`](crate::Error::UnknownGlyph) if a
    /// layout produces a character outside the atlas alphabet.
    pub fn render(
        &self,
        template: Canvas,
        seed: &SeedInput,
        derived: &Derived,
        base: BaseCoordinate,
    ) -> Result<Canvas> {
        let mut placements = Vec::with_capacity(128);
        placements.extend(date::layout(seed));
        placements.extend(index::layout(seed.index_value()));
        placements.extend(hash::layout(&derived.hex_digest, self.atlas)?);
        placements.extend(latitude::layout(base.lat));
        placements.extend(longitude::layout(base.lon));
        placements.extend(decimals::layout(&derived.coordinate));

        let mut canvas = template;
        for placement in &placements {
            let glyph = self.atlas.lookup(placement.ch)?;
            canvas.paste(glyph.image(), placement.x, placement.y);
        }
        debug!(pastes = placements.len(), "composed comic");
        Ok(canvas)
    }
}
