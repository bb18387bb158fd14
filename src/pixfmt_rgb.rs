//! RGB pixel format (no alpha channel in buffer).
//!
//! The icon's native layout: 3 bytes per pixel, R=0, G=1, B=2, rows tightly
//! packed. Reads always come back as one of the colors that were written;
//! there is no blending path.

use crate::color::{OrderRgb, Rgb8};
use crate::pixfmt_rgba::PixelFormat;
use crate::rendering_buffer::RenderingBuffer;

/// Bytes per pixel for RGB24.
const BPP: usize = OrderRgb::N;

/// Pixel format for RGB24 (3 bytes per pixel).
pub struct PixfmtRgb24<'a> {
    rbuf: &'a mut RenderingBuffer,
}

impl<'a> PixfmtRgb24<'a> {
    pub const BPP: usize = BPP;

    pub fn new(rbuf: &'a mut RenderingBuffer) -> Self {
        debug_assert_eq!(rbuf.stride(), rbuf.width() as usize * BPP);
        Self { rbuf }
    }

    /// Clear the entire buffer to a solid color.
    pub fn clear(&mut self, c: &Rgb8) {
        for y in 0..self.rbuf.height() {
            for p in self.rbuf.row_slice_mut(y).chunks_exact_mut(BPP) {
                Self::put(p, c);
            }
        }
    }

    #[inline]
    fn put(p: &mut [u8], c: &Rgb8) {
        p[OrderRgb::R] = c.r;
        p[OrderRgb::G] = c.g;
        p[OrderRgb::B] = c.b;
    }
}

impl<'a> PixelFormat for PixfmtRgb24<'a> {
    fn width(&self) -> u32 {
        self.rbuf.width()
    }

    fn height(&self) -> u32 {
        self.rbuf.height()
    }

    fn copy_hline(&mut self, x: u32, y: u32, len: u32, c: &Rgb8) {
        let row = self.rbuf.row_slice_mut(y);
        let start = x as usize * BPP;
        let end = start + len as usize * BPP;
        for p in row[start..end].chunks_exact_mut(BPP) {
            Self::put(p, c);
        }
    }

    fn copy_pixel(&mut self, x: u32, y: u32, c: &Rgb8) {
        let off = x as usize * BPP;
        Self::put(&mut self.rbuf.row_slice_mut(y)[off..off + BPP], c);
    }

    fn pixel(&self, x: u32, y: u32) -> Rgb8 {
        let row = self.rbuf.row_slice(y);
        let off = x as usize * BPP;
        Rgb8::new(
            row[off + OrderRgb::R],
            row[off + OrderRgb::G],
            row[off + OrderRgb::B],
        )
    }
}
