//! Stripe painter.
//!
//! Fills the top-left quadrant with white and lays alternating blue/red
//! stripes over it as nested L shapes. Each L has a horizontal arm and a
//! vertical arm meeting at the quadrant's bottom-right, which becomes the icon
//! center once the quadrant is mirrored. Mirroring with inversion then turns
//! the L's into concentric squares whose horizontal-axis crossings are one
//! color and vertical-axis crossings the other.
//!
//! Offsets are measured inward from the center line. The first stripe starts
//! `white_width / 2` from it, so a separator of full width straddles the
//! center after mirroring.

use crate::basics::RectI;
use crate::color::Rgb8;
use crate::params::RenderConfig;
use crate::pixfmt_rgba::PixelFormat;
use crate::renderer_base::RendererBase;

/// One L-shaped stripe: its distance from the center line and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stripe {
    pub offset: i64,
    pub color: Rgb8,
}

impl Stripe {
    /// The horizontal arm: rows `[half - offset - red, half - offset)`,
    /// columns `[0, half - offset)`. May extend above row 0.
    pub fn horizontal_bar(&self, half: i64, red: i64) -> RectI {
        let inner = half - self.offset;
        RectI::from_xywh(0, inner - red, inner, red)
    }

    /// The vertical arm: the horizontal arm transposed.
    pub fn vertical_bar(&self, half: i64, red: i64) -> RectI {
        let inner = half - self.offset;
        RectI::from_xywh(inner - red, 0, red, inner)
    }
}

/// Iterator over the stripes the painter draws, innermost first.
///
/// Colors alternate starting with blue. Iteration ends once the offset reaches
/// the quadrant edge; the pitch is at least 1 because `red_width >= 1`.
#[derive(Debug, Clone)]
pub struct Stripes {
    offset: i64,
    pitch: i64,
    half: i64,
    flip: bool,
}

impl Stripes {
    pub fn new(cfg: &RenderConfig) -> Self {
        Self {
            offset: cfg.white_width() as i64 / 2,
            pitch: cfg.red_width() as i64 + cfg.white_width() as i64,
            half: cfg.half() as i64,
            flip: false,
        }
    }
}

impl Iterator for Stripes {
    type Item = Stripe;

    fn next(&mut self) -> Option<Stripe> {
        if self.offset >= self.half {
            return None;
        }
        let stripe = Stripe {
            offset: self.offset,
            color: if self.flip { Rgb8::RED } else { Rgb8::BLUE },
        };
        self.flip = !self.flip;
        self.offset += self.pitch;
        Some(stripe)
    }
}

/// Paint the top-left quadrant: white background, then every stripe in
/// iteration order. Later stripes overwrite earlier ones where they overlap.
///
/// Pixels outside the quadrant are left untouched. Returns the number of
/// stripes drawn.
pub fn paint_stripes<PF: PixelFormat>(ren: &mut RendererBase<PF>, cfg: &RenderConfig) -> usize {
    let half = cfg.half() as i64;
    let red = cfg.red_width() as i64;

    ren.clip_box_i(0, 0, half - 1, half - 1);
    ren.clear(&Rgb8::WHITE);

    let mut count = 0;
    for stripe in Stripes::new(cfg) {
        ren.copy_bar(&stripe.horizontal_bar(half, red), &stripe.color);
        ren.copy_bar(&stripe.vertical_bar(half, red), &stripe.color);
        count += 1;
    }

    ren.clip_box_i(0, 0, ren.width() as i64 - 1, ren.height() as i64 - 1);
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::RawParams;
    use crate::pixfmt_rgb::PixfmtRgb24;
    use crate::rendering_buffer::RenderingBuffer;

    fn cfg(size: i32, white: i32, red: i32) -> RenderConfig {
        RenderConfig::normalize(&RawParams::new(size, 0, 0, white, red))
    }

    fn paint(cfg: &RenderConfig) -> (RenderingBuffer, usize) {
        let size = cfg.icon_size();
        let mut rb = RenderingBuffer::new(size, size, PixfmtRgb24::BPP);
        let n = {
            let mut ren = RendererBase::new(PixfmtRgb24::new(&mut rb));
            paint_stripes(&mut ren, cfg)
        };
        (rb, n)
    }

    fn at(rb: &mut RenderingBuffer, x: u32, y: u32) -> Rgb8 {
        PixfmtRgb24::new(rb).pixel(x, y)
    }

    #[test]
    fn test_stripe_schedule_default() {
        let stripes: Vec<_> = Stripes::new(&RenderConfig::default()).collect();
        let offsets: Vec<_> = stripes.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![6, 36, 66, 96, 126]);
        assert_eq!(stripes[0].color, Rgb8::BLUE);
        assert_eq!(stripes[1].color, Rgb8::RED);
        assert_eq!(stripes[4].color, Rgb8::BLUE);
    }

    #[test]
    fn test_stripe_schedule_terminates_with_zero_widths() {
        let n = Stripes::new(&cfg(16, 0, 0)).count();
        // red clamps to 1, white is 0: one stripe per pixel of the quadrant
        assert_eq!(n, 8);
    }

    #[test]
    fn test_huge_widths_do_not_overflow() {
        let c = cfg(16, i32::MAX, i32::MAX);
        let stripes: Vec<_> = Stripes::new(&c).collect();
        assert!(stripes.is_empty());
        let c = cfg(16, 0, i32::MAX);
        assert_eq!(Stripes::new(&c).count(), 1);
    }

    #[test]
    fn test_bars() {
        let s = Stripe {
            offset: 6,
            color: Rgb8::BLUE,
        };
        assert_eq!(s.horizontal_bar(128, 18), RectI::new(0, 104, 121, 121));
        assert_eq!(s.vertical_bar(128, 18), RectI::new(104, 0, 121, 121));
    }

    #[test]
    fn test_l_shape_two_stripes() {
        // half = 8, red = 4, white = 0: blue L at offset 0, red 4x4 at offset 4
        let (mut rb, n) = paint(&cfg(16, 0, 4));
        assert_eq!(n, 2);
        for y in 0..8 {
            for x in 0..8 {
                let expected = if x < 4 && y < 4 { Rgb8::RED } else { Rgb8::BLUE };
                assert_eq!(at(&mut rb, x, y), expected, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_center_separator_is_white() {
        // white = 4: two white pixels on the quadrant side of the center line
        let (mut rb, _) = paint(&cfg(32, 4, 3));
        for i in 0..16 {
            assert_eq!(at(&mut rb, 14, i), Rgb8::WHITE);
            assert_eq!(at(&mut rb, 15, i), Rgb8::WHITE);
            assert_eq!(at(&mut rb, i, 14), Rgb8::WHITE);
            assert_eq!(at(&mut rb, i, 15), Rgb8::WHITE);
        }
        // First stripe occupies [16 - 2 - 3, 16 - 2) = [11, 14)
        assert_eq!(at(&mut rb, 11, 11), Rgb8::BLUE);
        assert_eq!(at(&mut rb, 13, 0), Rgb8::BLUE);
        assert_eq!(at(&mut rb, 0, 13), Rgb8::BLUE);
        assert_eq!(at(&mut rb, 10, 10), Rgb8::WHITE);
    }

    #[test]
    fn test_outside_quadrant_untouched() {
        let (mut rb, _) = paint(&cfg(16, 2, 3));
        let black = Rgb8::new(0, 0, 0);
        for i in 0..16 {
            for j in 8..16 {
                assert_eq!(at(&mut rb, j, i), black);
                assert_eq!(at(&mut rb, i, j), black);
            }
        }
    }

    #[test]
    fn test_last_write_wins() {
        // red far wider than the quadrant: the first blue stripe covers
        // everything and no second stripe is drawn
        let (mut rb, n) = paint(&cfg(32, 0, 100));
        assert_eq!(n, 1);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(at(&mut rb, x, y), Rgb8::BLUE);
            }
        }
    }
}
