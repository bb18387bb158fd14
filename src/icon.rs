//! Rasterizer entry points.
//!
//! Every call allocates one `icon_size x icon_size` buffer and runs the
//! stages in order, each on the finished output of the previous one:
//!
//! 1. [`paint_stripes`] into the top-left quadrant
//! 2. [`apply_corner_mask`] over the same quadrant
//! 3. [`mirror_quadrants`] into the rest of the image
//!
//! No stage can fail and nothing is retained between calls.

use tracing::{debug_span, trace};

use crate::corner_mask::{apply_corner_mask, CornerGeometry};
use crate::image::Image;
use crate::mirror::mirror_quadrants;
use crate::params::{RawParams, RenderConfig};
use crate::pixfmt_rgb::PixfmtRgb24;
use crate::renderer_base::RendererBase;
use crate::rendering_buffer::RenderingBuffer;
use crate::stripes::paint_stripes;

/// Render an icon from raw host values. Out-of-range values are clamped.
pub fn render(
    icon_size: i32,
    border_width: i32,
    curve_percent: i32,
    white_width: i32,
    red_width: i32,
) -> Image {
    render_params(&RawParams::new(
        icon_size,
        border_width,
        curve_percent,
        white_width,
        red_width,
    ))
}

/// Render an icon from a bundle of raw host values.
pub fn render_params(raw: &RawParams) -> Image {
    render_config(&RenderConfig::normalize(raw))
}

/// Render an icon from an already normalized configuration.
pub fn render_config(cfg: &RenderConfig) -> Image {
    let span = debug_span!("render", %cfg);
    let _enter = span.enter();

    let size = cfg.icon_size();
    let mut rbuf = RenderingBuffer::new(size, size, PixfmtRgb24::BPP);
    {
        let mut ren = RendererBase::new(PixfmtRgb24::new(&mut rbuf));
        let stripes = paint_stripes(&mut ren, cfg);
        trace!(stripes, "painted stripes");

        let geom = CornerGeometry::new(cfg);
        let masked = apply_corner_mask(ren.ren_mut(), &geom);
        trace!(
            radius = geom.radius,
            center = geom.center,
            squared_radius = geom.squared_radius,
            masked,
            "applied corner mask"
        );

        mirror_quadrants(ren.ren_mut());
    }
    Image::new(*cfg, rbuf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb8;

    #[test]
    fn test_render_dimensions() {
        let img = render(17, 0, 0, 0, 1);
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 16);
        assert_eq!(img.as_bytes().len(), 16 * 16 * 3);
    }

    #[test]
    fn test_entry_points_agree() {
        let raw = RawParams::new(40, 3, 60, 4, 5);
        let a = render(40, 3, 60, 4, 5);
        let b = render_params(&raw);
        let c = render_config(&RenderConfig::normalize(&raw));
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_smallest_icon() {
        // half = 1: one stripe covers the single quadrant pixel
        let img = render(2, 0, 0, 0, 1);
        assert_eq!(img.pixel(0, 0), Rgb8::BLUE);
        assert_eq!(img.pixel(1, 0), Rgb8::RED);
        assert_eq!(img.pixel(0, 1), Rgb8::RED);
        assert_eq!(img.pixel(1, 1), Rgb8::BLUE);
    }

    #[test]
    fn test_extreme_curve_renders() {
        let img = render(512, 0, i32::MAX, 0, 1);
        assert_eq!(img.count(Rgb8::GRAY), 512 * 512);

        let img = render(512, 0, i32::MIN, 0, 1);
        assert_eq!(img.count(Rgb8::GRAY), 0);
        assert_eq!(img.count(Rgb8::BLUE), img.count(Rgb8::RED));
    }

    #[test]
    fn test_every_pixel_written() {
        let img = render_params(&RawParams::default());
        assert!(img.pixels().all(|(_, _, c)| c.in_palette()));
    }
}
