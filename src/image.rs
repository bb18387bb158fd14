//! The rendered icon handed to a host.

use crate::color::Rgb8;
use crate::params::RenderConfig;
use crate::pixfmt_rgb::PixfmtRgb24;
use crate::pixfmt_rgba::{PixelFormat, PixfmtRgba32};
use crate::rendering_buffer::RenderingBuffer;

/// A square RGB24 icon, rows top-down, no padding.
///
/// Owns its pixels; the rasterizer keeps nothing after returning one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    config: RenderConfig,
    rbuf: RenderingBuffer,
}

impl Image {
    pub(crate) fn new(config: RenderConfig, rbuf: RenderingBuffer) -> Self {
        debug_assert_eq!(rbuf.width(), config.icon_size());
        debug_assert_eq!(rbuf.height(), config.icon_size());
        Self { config, rbuf }
    }

    /// The configuration this image was rendered from.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn width(&self) -> u32 {
        self.rbuf.width()
    }

    pub fn height(&self) -> u32 {
        self.rbuf.height()
    }

    /// Color at column `x`, row `y`.
    ///
    /// # Panics
    /// If `(x, y)` is outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb8 {
        assert!(x < self.width(), "column {} out of bounds (width={})", x, self.width());
        let row = self.rbuf.row_slice(y);
        let off = x as usize * PixfmtRgb24::BPP;
        Rgb8::new(row[off], row[off + 1], row[off + 2])
    }

    /// Iterate over `(x, y, color)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Rgb8)> + '_ {
        let w = self.width();
        self.rbuf
            .as_bytes()
            .chunks_exact(PixfmtRgb24::BPP)
            .enumerate()
            .map(move |(n, p)| {
                let n = n as u32;
                (n % w, n / w, Rgb8::new(p[0], p[1], p[2]))
            })
    }

    /// Number of pixels of exactly color `c`.
    pub fn count(&self, c: Rgb8) -> usize {
        self.rbuf
            .as_bytes()
            .chunks_exact(PixfmtRgb24::BPP)
            .filter(|p| p[0] == c.r && p[1] == c.g && p[2] == c.b)
            .count()
    }

    /// Raw RGB bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        self.rbuf.as_bytes()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.rbuf.into_vec()
    }

    /// The same pixels as RGBA with opaque alpha.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let (w, h) = (self.width(), self.height());
        let mut out = RenderingBuffer::new(w, h, PixfmtRgba32::BPP);
        {
            let mut pf = PixfmtRgba32::new(&mut out);
            for (x, y, c) in self.pixels() {
                pf.copy_pixel(x, y, &c);
            }
        }
        out.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::RawParams;

    fn tiny() -> Image {
        let cfg = RenderConfig::normalize(&RawParams::new(2, 0, 0, 0, 1));
        let mut rb = RenderingBuffer::new(2, 2, PixfmtRgb24::BPP);
        {
            let mut pf = PixfmtRgb24::new(&mut rb);
            pf.copy_pixel(0, 0, &Rgb8::BLUE);
            pf.copy_pixel(1, 0, &Rgb8::RED);
            pf.copy_pixel(0, 1, &Rgb8::RED);
            pf.copy_pixel(1, 1, &Rgb8::BLUE);
        }
        Image::new(cfg, rb)
    }

    #[test]
    fn test_dimensions_and_pixels() {
        let img = tiny();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.pixel(1, 0), Rgb8::RED);
        assert_eq!(img.pixel(1, 1), Rgb8::BLUE);
        assert_eq!(img.config().icon_size(), 2);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_pixel_out_of_bounds() {
        tiny().pixel(2, 0);
    }

    #[test]
    fn test_pixels_row_major() {
        let coords: Vec<_> = tiny().pixels().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_count() {
        let img = tiny();
        assert_eq!(img.count(Rgb8::BLUE), 2);
        assert_eq!(img.count(Rgb8::RED), 2);
        assert_eq!(img.count(Rgb8::WHITE), 0);
    }

    #[test]
    fn test_byte_layouts() {
        let img = tiny();
        assert_eq!(&img.as_bytes()[..6], &[0, 0, 128, 128, 0, 0]);
        let rgba = img.to_rgba_bytes();
        assert_eq!(rgba.len(), 16);
        assert_eq!(&rgba[..8], &[0, 0, 128, 255, 128, 0, 0, 255]);
        assert_eq!(img.into_bytes().len(), 12);
    }
}
