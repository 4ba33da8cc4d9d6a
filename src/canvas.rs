//! RGBA pixel canvas for comic composition.
//!
//! The canvas is a tightly-packed row-major RGBA buffer. One canvas is
//! created per render (from the template asset), mutated only by glyph
//! pastes, and then handed to an output encoder.

use crate::error::{Error, Result};
use std::io::Read;

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

/// Mutable RGBA canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes per pixel, no padding.
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a canvas filled with transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let size = (width as usize) * (height as usize) * 4;
        Ok(Self {
            width,
            height,
            pixels: vec![0; size],
        })
    }

    /// Decode a PNG stream into a canvas.
    ///
    /// Accepts any PNG color type; pixels are normalized to RGBA8
    /// (palette and 16-bit images are expanded by the decoder).
    ///
    /// # Errors
    ///
    /// Returns an error on a malformed stream or zero-sized image.
    pub fn decode<R: Read>(reader: R) -> Result<Self> {
        let mut decoder = png::Decoder::new(reader);
        decoder.set_transformations(png::Transformations::normalize_to_color8());
        let mut reader = decoder.read_info()?;
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf)?;
        buf.truncate(info.buffer_size());

        let mut canvas = Self::new(info.width, info.height)?;
        match info.color_type {
            png::ColorType::Rgba => canvas.pixels.copy_from_slice(&buf),
            png::ColorType::Rgb => {
                for (dst, src) in canvas.pixels.chunks_exact_mut(4).zip(buf.chunks_exact(3)) {
                    dst[..3].copy_from_slice(src);
                    dst[3] = 255;
                }
            }
            png::ColorType::Grayscale => {
                for (dst, &g) in canvas.pixels.chunks_exact_mut(4).zip(buf.iter()) {
                    dst[0] = g;
                    dst[1] = g;
                    dst[2] = g;
                    dst[3] = 255;
                }
            }
            png::ColorType::GrayscaleAlpha => {
                for (dst, src) in canvas.pixels.chunks_exact_mut(4).zip(buf.chunks_exact(2)) {
                    dst[0] = src[0];
                    dst[1] = src[0];
                    dst[2] = src[0];
                    dst[3] = src[1];
                }
            }
            // normalize_to_color8 expands palette images to RGB
            png::ColorType::Indexed => {
                return Err(Error::PngDecoding(png::DecodingError::LimitsExceeded))
            }
        }
        Ok(canvas)
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the raw pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get the color at a pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Fill the whole canvas with a solid color.
    pub fn fill(&mut self, color: Rgba) {
        let arr = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&arr);
        }
    }

    /// Paste another canvas with its top-left corner at `(x, y)`.
    ///
    /// An opaque copy, not an alpha blend. The source is clipped to the
    /// canvas bounds; negative coordinates clip from the left/top.
    pub fn paste(&mut self, src: &Canvas, x: i64, y: i64) {
        let dst_x0 = x.max(0);
        let dst_y0 = y.max(0);
        let dst_x1 = (x + i64::from(src.width)).min(i64::from(self.width));
        let dst_y1 = (y + i64::from(src.height)).min(i64::from(self.height));
        if dst_x0 >= dst_x1 || dst_y0 >= dst_y1 {
            return;
        }

        let row_bytes = ((dst_x1 - dst_x0) as usize) * 4;
        for dst_y in dst_y0..dst_y1 {
            let src_x = (dst_x0 - x) as usize;
            let src_y = (dst_y - y) as usize;
            let src_start = (src_y * (src.width as usize) + src_x) * 4;
            let dst_start = ((dst_y as usize) * (self.width as usize) + (dst_x0 as usize)) * 4;
            self.pixels[dst_start..dst_start + row_bytes]
                .copy_from_slice(&src.pixels[src_start..src_start + row_bytes]);
        }
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas() {
        let canvas = Canvas::new(100, 50).unwrap();
        assert_eq!(canvas.width(), 100);
        assert_eq!(canvas.height(), 50);
        assert_eq!(canvas.pixels().len(), 100 * 50 * 4);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Canvas::new(0, 100).is_err());
        assert!(Canvas::new(100, 0).is_err());
    }

    #[test]
    fn test_set_get_pixel() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.set_pixel(5, 5, Rgba::rgb(1, 2, 3));
        assert_eq!(canvas.get_pixel(5, 5), Some(Rgba::rgb(1, 2, 3)));
        assert_eq!(canvas.get_pixel(100, 100), None);
    }

    #[test]
    fn test_fill() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.fill(Rgba::WHITE);
        assert_eq!(canvas.get_pixel(0, 0), Some(Rgba::WHITE));
        assert_eq!(canvas.get_pixel(3, 3), Some(Rgba::WHITE));
    }

    #[test]
    fn test_paste_copies_pixels() {
        let mut dst = Canvas::new(10, 10).unwrap();
        dst.fill(Rgba::WHITE);
        let mut src = Canvas::new(2, 2).unwrap();
        src.fill(Rgba::BLACK);

        dst.paste(&src, 3, 4);

        assert_eq!(dst.get_pixel(3, 4), Some(Rgba::BLACK));
        assert_eq!(dst.get_pixel(4, 5), Some(Rgba::BLACK));
        assert_eq!(dst.get_pixel(2, 4), Some(Rgba::WHITE));
        assert_eq!(dst.get_pixel(5, 4), Some(Rgba::WHITE));
    }

    #[test]
    fn test_paste_clips_at_edges() {
        let mut dst = Canvas::new(4, 4).unwrap();
        dst.fill(Rgba::WHITE);
        let mut src = Canvas::new(3, 3).unwrap();
        src.fill(Rgba::BLACK);

        // Partially off every edge; must not panic.
        dst.paste(&src, -1, -1);
        dst.paste(&src, 3, 3);
        dst.paste(&src, 10, 10);

        assert_eq!(dst.get_pixel(0, 0), Some(Rgba::BLACK));
        assert_eq!(dst.get_pixel(1, 1), Some(Rgba::BLACK));
        assert_eq!(dst.get_pixel(2, 2), Some(Rgba::WHITE));
        assert_eq!(dst.get_pixel(3, 3), Some(Rgba::BLACK));
    }

    #[test]
    fn test_decode_round_trip() {
        use crate::output::PngEncoder;

        let mut canvas = Canvas::new(6, 3).unwrap();
        canvas.fill(Rgba::rgb(10, 20, 30));
        canvas.set_pixel(2, 1, Rgba::rgb(200, 100, 50));

        let bytes = PngEncoder::to_bytes(&canvas).unwrap();
        let decoded = Canvas::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, canvas);
    }
}
