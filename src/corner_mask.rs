//! Corner mask: border strip and rounded corner in integer arithmetic.
//!
//! The outward corner of the top-left quadrant is `(0, 0)`. A pixel is kept
//! if it lies inside the rounded rectangle inset by `border_width`; otherwise
//! it is overwritten with gray. The arc test compares squared distances
//! against a precomputed integer, so no square roots are taken and pixels
//! never mix integer and floating-point coordinates.
//!
//! The test is symmetric in its two coordinates, so it does not matter which
//! one is the row.

use crate::basics::round_half_up;
use crate::color::Rgb8;
use crate::params::RenderConfig;
use crate::pixfmt_rgba::PixelFormat;

/// Nudges the discrete arc outward by a fraction of a pixel so near-integer
/// radii give clean arcs. Reference images depend on this exact value.
pub const RADIUS_FUZZ: f64 = 0.3;

/// Which rule decided a pixel's fate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskRule {
    /// Inside the border margin: gray.
    Border,
    /// Along a straight edge of the rounded rectangle: kept.
    Straight,
    /// In the corner square but beyond the arc: gray.
    OutsideArc,
    /// In the corner square within the arc: kept.
    InsideArc,
}

impl MaskRule {
    pub fn is_masked(self) -> bool {
        matches!(self, MaskRule::Border | MaskRule::OutsideArc)
    }
}

/// Corner rounding geometry in quadrant-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerGeometry {
    /// Quadrant edge length.
    pub half: i64,
    pub border: i64,
    /// `round(curve_percent * (half - border) / 100)`.
    pub radius: i64,
    /// Center of the rounding circle on both axes: `border + radius`.
    pub center: i64,
    /// `trunc((radius + 0.3)^2)`, saturating at `i64::MAX`.
    pub squared_radius: i64,
}

impl CornerGeometry {
    pub fn new(cfg: &RenderConfig) -> Self {
        let half = cfg.half() as i64;
        let border = cfg.border_width() as i64;
        let radius = round_half_up((cfg.curve_percent() as i64 * (half - border)) as f64 / 100.0);
        let fuzzy = radius as f64 + RADIUS_FUZZ;
        Self {
            half,
            border,
            radius,
            center: border + radius,
            squared_radius: (fuzzy * fuzzy) as i64,
        }
    }

    /// Widened so radii from extreme `curve_percent` values cannot overflow.
    #[inline]
    fn squared_distance(di: i64, dk: i64) -> i128 {
        let (di, dk) = (di as i128, dk as i128);
        di * di + dk * dk
    }

    /// Classify quadrant pixel `(i, k)`; the first matching rule wins.
    #[inline]
    pub fn classify(&self, i: i64, k: i64) -> MaskRule {
        if i < self.border || k < self.border {
            MaskRule::Border
        } else if i >= self.center || k >= self.center {
            MaskRule::Straight
        } else if Self::squared_distance(i - self.center, k - self.center)
            > self.squared_radius as i128
        {
            MaskRule::OutsideArc
        } else {
            MaskRule::InsideArc
        }
    }
}

/// Overwrite every masked pixel of the top-left quadrant with gray.
///
/// Returns the number of pixels set to gray.
pub fn apply_corner_mask<PF: PixelFormat>(pf: &mut PF, geom: &CornerGeometry) -> usize {
    let mut masked = 0;
    for i in 0..geom.half {
        for k in 0..geom.half {
            if geom.classify(i, k).is_masked() {
                pf.copy_pixel(i as u32, k as u32, &Rgb8::GRAY);
                masked += 1;
            }
        }
    }
    masked
}
