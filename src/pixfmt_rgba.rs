//! RGBA pixel format with an always-opaque alpha channel.
//!
//! Provides the `PixelFormat` trait shared by all pixel layouts, and
//! `PixfmtRgba32` for hosts that want four bytes per pixel. The icon never
//! carries transparency, so every write stores `a = 255`.

use crate::color::{OrderRgba, Rgb8};
use crate::rendering_buffer::RenderingBuffer;

// ============================================================================
// PixelFormat trait
// ============================================================================

/// Trait for pixel formats that read and overwrite colors in a rendering buffer.
///
/// This is the layer between the renderer and the raw bytes. Coordinates are
/// unchecked here; clipping is the job of [`RendererBase`].
///
/// [`RendererBase`]: crate::renderer_base::RendererBase
pub trait PixelFormat {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Copy (overwrite) a horizontal line of `len` pixels with color `c`.
    fn copy_hline(&mut self, x: u32, y: u32, len: u32, c: &Rgb8);

    /// Copy (overwrite) a single pixel at (x, y) with color `c`.
    fn copy_pixel(&mut self, x: u32, y: u32, c: &Rgb8);

    /// Get the pixel color at (x, y).
    fn pixel(&self, x: u32, y: u32) -> Rgb8;
}

// ============================================================================
// PixfmtRgba32: RGBA, 8 bits per channel, opaque
// ============================================================================

const BPP: usize = OrderRgba::N;

/// Pixel format for RGBA32 (4 bytes per pixel, R=0, G=1, B=2, A=3).
pub struct PixfmtRgba32<'a> {
    rbuf: &'a mut RenderingBuffer,
}

impl<'a> PixfmtRgba32<'a> {
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
        p[OrderRgba::R] = c.r;
        p[OrderRgba::G] = c.g;
        p[OrderRgba::B] = c.b;
        p[OrderRgba::A] = 255;
    }
}

impl<'a> PixelFormat for PixfmtRgba32<'a> {
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
            row[off + OrderRgba::R],
            row[off + OrderRgba::G],
            row[off + OrderRgba::B],
        )
    }
}
