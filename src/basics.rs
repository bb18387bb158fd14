//! Foundation types shared by the pixel formats and the rasterizer stages.
//!
//! Integer rectangles with clipping, and the one rounding rule the corner
//! geometry depends on.

// ============================================================================
// Rounding
// ============================================================================

/// Round to the nearest integer, halves rounding toward positive infinity.
///
/// This is `floor(v + 0.5)`, so `-2.5` rounds to `-2` (not `-3` as a
/// round-half-away-from-zero would give). The corner radius depends on this
/// exact rule.
#[inline]
pub fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two inclusive corner points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Normalize so that x1 <= x2 and y1 <= y2, swapping if needed.
    pub fn normalize(&mut self) -> &Self {
        if self.x1 > self.x2 {
            core::mem::swap(&mut self.x1, &mut self.x2);
        }
        if self.y1 > self.y2 {
            core::mem::swap(&mut self.y1, &mut self.y2);
        }
        self
    }

    /// Clip this rectangle to the intersection with `r`.
    /// Returns `true` if the result is a valid (non-empty) rectangle.
    pub fn clip(&mut self, r: &Self) -> bool {
        if self.x2 > r.x2 {
            self.x2 = r.x2;
        }
        if self.y2 > r.y2 {
            self.y2 = r.y2;
        }
        if self.x1 < r.x1 {
            self.x1 = r.x1;
        }
        if self.y1 < r.y1 {
            self.y1 = r.y1;
        }
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Returns `true` if the rectangle is valid (non-empty).
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }
}

/// Rectangle with `i64` coordinates.
///
/// Stripe offsets are computed in `i64` so widths anywhere in the `i32` input
/// range cannot overflow; the coordinates are clipped to the buffer before
/// any pixel is touched.
pub type RectI = Rect<i64>;

impl RectI {
    /// Build the inclusive rectangle covering `w x h` pixels starting at
    /// `(x, y)`, the way a fill-rect call names its area.
    ///
    /// A non-positive `w` or `h` yields an invalid rectangle.
    pub fn from_xywh(x: i64, y: i64, w: i64, h: i64) -> Self {
        Self::new(x, y, x + w - 1, y + h - 1)
    }

    pub fn width(&self) -> i64 {
        self.x2 - self.x1 + 1
    }

    pub fn height(&self) -> i64 {
        self.y2 - self.y1 + 1
    }
}
