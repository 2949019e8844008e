//! Procedural rendering: canvas buffer, shape primitives, icon templates

pub mod paint;
pub mod templates;

use std::io::Cursor;
use std::path::Path;

use crate::{Error, Result};

pub use paint::{Rgba, Shape};
pub use templates::Template;

/// A square RGBA raster buffer.
///
/// Pixels are stored row-major, four bytes per pixel, straight
/// (non-premultiplied) alpha. A fresh canvas is fully transparent; drawing
/// replaces pixels outright (painter's algorithm), so the order of `draw`
/// calls is the only compositing rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    size: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a transparent canvas of `size` x `size` pixels.
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize(size));
        }
        Ok(Self {
            size,
            pixels: vec![0u8; size as usize * size as usize * 4],
        })
    }

    /// Wrap an existing RGBA buffer, e.g. one decoded from an external
    /// converter's output. The buffer length must match `size * size * 4`.
    pub fn from_rgba(size: u32, pixels: Vec<u8>) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize(size));
        }
        if pixels.len() != size as usize * size as usize * 4 {
            return Err(Error::DecodeError(format!(
                "buffer has {} bytes, expected {} for a {}x{} canvas",
                pixels.len(),
                size as usize * size as usize * 4,
                size,
                size
            )));
        }
        Ok(Self { size, pixels })
    }

    /// Side length in pixels
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raw RGBA bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Color of the pixel at (x, y). Coordinates must be inside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        assert!(x < self.size && y < self.size, "pixel out of bounds");
        let i = (y as usize * self.size as usize + x as usize) * 4;
        (
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        )
    }

    /// Replace the pixel at (x, y); coordinates outside the canvas are
    /// silently clipped so shape rasterizers never have to range-check.
    pub(crate) fn put(&mut self, x: i64, y: i64, rgba: Rgba) {
        if x < 0 || y < 0 || x >= i64::from(self.size) || y >= i64::from(self.size) {
            return;
        }
        let i = (y as usize * self.size as usize + x as usize) * 4;
        self.pixels[i] = rgba.0;
        self.pixels[i + 1] = rgba.1;
        self.pixels[i + 2] = rgba.2;
        self.pixels[i + 3] = rgba.3;
    }

    /// Draw a shape onto the canvas (replaces covered pixels).
    pub fn draw(&mut self, shape: &Shape) {
        paint::draw(self, shape);
    }

    /// Encode the buffer as PNG bytes with a full alpha channel.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let img = image::RgbaImage::from_raw(self.size, self.size, self.pixels.clone())
            .ok_or_else(|| Error::EncodeError("RGBA buffer length mismatch".to_string()))?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .map_err(|e| Error::EncodeError(e.to_string()))?;
        Ok(out.into_inner())
    }

    /// Encode and write the canvas to `path`.
    pub fn write_png(&self, path: &Path) -> Result<()> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes).map_err(|e| Error::WriteError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_transparent() {
        let c = Canvas::new(4).unwrap();
        assert_eq!(c.size(), 4);
        assert_eq!(c.pixels().len(), 4 * 4 * 4);
        assert!(c.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn zero_size_is_rejected() {
        match Canvas::new(0) {
            Err(Error::InvalidSize(0)) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn put_and_get_roundtrip() {
        let mut c = Canvas::new(3).unwrap();
        c.put(1, 2, (10, 20, 30, 40));
        assert_eq!(c.get(1, 2), (10, 20, 30, 40));
        // Out-of-bounds writes are clipped, not panics
        c.put(-1, 0, (1, 1, 1, 1));
        c.put(3, 3, (1, 1, 1, 1));
        assert_eq!(c.get(0, 0), (0, 0, 0, 0));
    }

    #[test]
    fn from_rgba_checks_length() {
        assert!(Canvas::from_rgba(2, vec![0u8; 16]).is_ok());
        assert!(Canvas::from_rgba(2, vec![0u8; 15]).is_err());
    }
}
