//! Base renderer with clipping.
//!
//! Wraps a pixel format with a clip rectangle so that every write is bounded
//! to the visible area. The stripe painter relies on this: bars near the
//! quadrant's outer edge are specified with negative coordinates and must be
//! cut, not wrapped or rejected.

use crate::basics::RectI;
use crate::color::Rgb8;
use crate::pixfmt_rgba::PixelFormat;

// ============================================================================
// RendererBase: clip-and-delegate renderer
// ============================================================================

/// Base renderer that clips all operations to a rectangle before delegating
/// to the underlying pixel format.
pub struct RendererBase<PF: PixelFormat> {
    ren: PF,
    clip_box: RectI,
}

impl<PF: PixelFormat> RendererBase<PF> {
    /// Create a new renderer wrapping the given pixel format.
    /// The clip box is initialized to the full buffer extent.
    pub fn new(ren: PF) -> Self {
        let w = ren.width() as i64;
        let h = ren.height() as i64;
        Self {
            ren,
            clip_box: RectI::new(0, 0, w - 1, h - 1),
        }
    }

    pub fn width(&self) -> u32 {
        self.ren.width()
    }
    pub fn height(&self) -> u32 {
        self.ren.height()
    }

    /// Set the clip rectangle (will be intersected with the buffer bounds).
    pub fn clip_box_i(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) -> bool {
        let mut cb = RectI::new(x1, y1, x2, y2);
        cb.normalize();
        if cb.clip(&RectI::new(
            0,
            0,
            self.ren.width() as i64 - 1,
            self.ren.height() as i64 - 1,
        )) {
            self.clip_box = cb;
            true
        } else {
            self.clip_box = RectI::new(1, 1, 0, 0);
            false
        }
    }

    /// Get a mutable reference to the underlying pixel format.
    pub fn ren_mut(&mut self) -> &mut PF {
        &mut self.ren
    }

    // ========================================================================
    // Rendering operations (clip then delegate)
    // ========================================================================

    /// Clear the area inside the clip box to a solid color.
    pub fn clear(&mut self, c: &Rgb8) {
        let cb = self.clip_box;
        self.copy_bar(&cb, c);
    }

    /// Fill the inclusive rectangle `r` (clipped).
    ///
    /// Unlike a vertex-based rect, `r` is not normalized: a rectangle with
    /// `x2 < x1` or `y2 < y1` covers nothing.
    pub fn copy_bar(&mut self, r: &RectI, c: &Rgb8) {
        let mut rc = *r;
        if !rc.is_valid() || !rc.clip(&self.clip_box) {
            return;
        }
        let len = rc.width() as u32;
        for y in rc.y1..=rc.y2 {
            self.ren.copy_hline(rc.x1 as u32, y as u32, len, c);
        }
    }
}
