//! Quadrant mirror.
//!
//! Completes the icon from its top-left quadrant. The two quadrants reached by
//! a single axis reflection (top-right, bottom-left) get the quadrant with blue
//! and red swapped; the diagonally opposite quadrant (bottom-right) gets it
//! unchanged.

use crate::pixfmt_rgba::PixelFormat;

/// Mirror the top-left `half x half` quadrant of a square pixel format into
/// the other three quadrants. `half` is taken from the format's width.
pub fn mirror_quadrants<PF: PixelFormat>(pf: &mut PF) {
    let size = pf.width();
    debug_assert_eq!(size, pf.height());
    debug_assert_eq!(size % 2, 0);
    let half = size / 2;
    let last = size - 1;

    for k in 0..half {
        for i in 0..half {
            let c = pf.pixel(i, k);
            let inv = c.inverted();
            pf.copy_pixel(last - i, k, &inv);
            pf.copy_pixel(i, last - k, &inv);
            pf.copy_pixel(last - i, last - k, &c);
        }
    }
}
