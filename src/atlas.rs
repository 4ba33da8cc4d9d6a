//! Glyph atlas: one pre-rendered image per alphabet character.
//!
//! The atlas is built once at startup from 17 PNG assets and shared by
//! reference across all renders; nothing mutates it afterwards. A
//! missing or unreadable asset is fatal at construction time.

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// The glyph alphabet: hex digits plus the minus sign.
pub const ALPHABET: &str = "0123456789abcdef-";

/// A single pre-rendered character image.
///
/// Width varies per character; height is uniform across the atlas.
#[derive(Debug, Clone)]
pub struct Glyph {
    image: Canvas,
}

impl Glyph {
    /// Wrap a rendered character image.
    #[must_use]
    pub const fn new(image: Canvas) -> Self {
        Self { image }
    }

    /// Pixel width of this glyph.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.image.width()
    }

    /// Pixel height of this glyph.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.image.height()
    }

    /// The glyph's pixel data.
    #[must_use]
    pub const fn image(&self) -> &Canvas {
        &self.image
    }
}

/// Immutable character-to-glyph mapping.
#[derive(Debug, Clone)]
pub struct GlyphAtlas {
    glyphs: HashMap<char, Glyph>,
}

impl GlyphAtlas {
    /// Load the full alphabet from a directory of PNG assets.
    ///
    /// Each character maps to `<char>.png`; the minus sign maps to
    /// `m.png` to keep the file name filesystem-safe.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AssetMissing`] for any absent or corrupt asset,
    /// or [`Error::GlyphHeightMismatch`] if the assets do not share one
    /// pixel height. Both are startup-time failures; there is no
    /// per-render retry.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut glyphs = HashMap::with_capacity(ALPHABET.len());
        for c in ALPHABET.chars() {
            let name = Self::asset_name(c);
            let path = dir.join(&name);
            let image = Self::load_asset(&path, &name)?;
            glyphs.insert(c, Glyph::new(image));
        }
        debug!(count = glyphs.len(), dir = %dir.display(), "loaded glyph atlas");
        Self::from_glyphs(glyphs)
    }

    /// Build an atlas from in-memory glyphs (embedded assets, tests).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownGlyph`] if any alphabet character is
    /// missing, or [`Error::GlyphHeightMismatch`] on non-uniform
    /// heights.
    pub fn from_glyphs<I>(glyphs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, Glyph)>,
    {
        let glyphs: HashMap<char, Glyph> = glyphs.into_iter().collect();

        let mut expected_height = None;
        for c in ALPHABET.chars() {
            let glyph = glyphs.get(&c).ok_or(Error::UnknownGlyph(c))?;
            let expected = *expected_height.get_or_insert(glyph.height());
            if glyph.height() != expected {
                return Err(Error::GlyphHeightMismatch {
                    expected,
                    found: glyph.height(),
                    glyph: c,
                });
            }
        }

        Ok(Self { glyphs })
    }

    /// Asset file name for an alphabet character.
    #[must_use]
    pub fn asset_name(c: char) -> String {
        match c {
            '-' => "m.png".to_string(),
            _ => format!("{c}.png"),
        }
    }

    /// Look up the glyph for a character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownGlyph`] for characters outside the
    /// alphabet. Formatting characters (space, sign, decimal point)
    /// are filtered by the field renderers before lookup, so hitting
    /// this error indicates a caller bug.
    pub fn lookup(&self, c: char) -> Result<&Glyph> {
        self.glyphs.get(&c).ok_or(Error::UnknownGlyph(c))
    }

    /// Pixel width of the glyph for `c`.
    pub fn glyph_width(&self, c: char) -> Result<u32> {
        Ok(self.lookup(c)?.width())
    }

    fn load_asset(path: &Path, name: &str) -> Result<Canvas> {
        let file = File::open(path).map_err(|e| Error::AssetMissing {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        Canvas::decode(BufReader::new(file)).map_err(|e| Error::AssetMissing {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Rgba;
    use crate::output::PngEncoder;

    fn solid_glyph(width: u32, height: u32, color: Rgba) -> Glyph {
        let mut canvas = Canvas::new(width, height).unwrap();
        canvas.fill(color);
        Glyph::new(canvas)
    }

    fn full_alphabet(height: u32) -> Vec<(char, Glyph)> {
        ALPHABET
            .chars()
            .enumerate()
            .map(|(i, c)| (c, solid_glyph(9 + (i as u32 % 3), height, Rgba::BLACK)))
            .collect()
    }

    #[test]
    fn test_asset_names() {
        assert_eq!(GlyphAtlas::asset_name('0'), "0.png");
        assert_eq!(GlyphAtlas::asset_name('f'), "f.png");
        assert_eq!(GlyphAtlas::asset_name('-'), "m.png");
    }

    #[test]
    fn test_from_glyphs_lookup() {
        let atlas = GlyphAtlas::from_glyphs(full_alphabet(13)).unwrap();
        assert_eq!(atlas.lookup('0').unwrap().height(), 13);
        assert_eq!(atlas.glyph_width('1').unwrap(), 10);
        assert!(atlas.lookup('z').is_err());
    }

    #[test]
    fn test_from_glyphs_requires_full_alphabet() {
        let mut glyphs = full_alphabet(13);
        glyphs.retain(|(c, _)| *c != 'a');
        assert!(matches!(
            GlyphAtlas::from_glyphs(glyphs),
            Err(Error::UnknownGlyph('a'))
        ));
    }

    #[test]
    fn test_from_glyphs_rejects_height_mismatch() {
        let mut glyphs = full_alphabet(13);
        glyphs.push(('-', solid_glyph(7, 12, Rgba::BLACK)));
        assert!(matches!(
            GlyphAtlas::from_glyphs(glyphs),
            Err(Error::GlyphHeightMismatch { expected: 13, found: 12, glyph: '-' })
        ));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        for c in ALPHABET.chars() {
            let mut canvas = Canvas::new(9, 13).unwrap();
            canvas.fill(Rgba::BLACK);
            PngEncoder::write_to_file(&canvas, dir.path().join(GlyphAtlas::asset_name(c))).unwrap();
        }

        let atlas = GlyphAtlas::load(dir.path()).unwrap();
        assert_eq!(atlas.lookup('-').unwrap().width(), 9);
        assert_eq!(atlas.lookup('e').unwrap().height(), 13);
    }

    #[test]
    fn test_load_missing_asset_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = GlyphAtlas::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::AssetMissing { .. }));
    }
}
