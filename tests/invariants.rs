//! Properties every rendered icon satisfies, checked over the host ranges.

use proptest::prelude::*;
use stripe_icon::{render_params, Image, RawParams, Rgb8};

fn raw_params() -> impl Strategy<Value = RawParams> {
    (16i32..=128, 0i32..=99, 0i32..=99, 0i32..=99, 1i32..=99).prop_map(
        |(size, border, curve, white, red)| RawParams::new(size, border, curve, white, red),
    )
}

fn gray_count(raw: RawParams) -> usize {
    render_params(&raw).count(Rgb8::GRAY)
}

fn mirrors(img: &Image, x: u32, y: u32) -> (Rgb8, Rgb8, Rgb8) {
    let last = img.width() - 1;
    (
        img.pixel(last - x, y),
        img.pixel(x, last - y),
        img.pixel(last - x, last - y),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn dimensions_are_even_and_square(raw in raw_params()) {
        let img = render_params(&raw);
        prop_assert_eq!(img.width(), img.height());
        prop_assert_eq!(img.width() % 2, 0);
        prop_assert_eq!(img.width() as i32, raw.icon_size - raw.icon_size % 2);
        prop_assert_eq!(img.as_bytes().len(), (img.width() * img.height() * 3) as usize);
    }

    #[test]
    fn palette_closure(raw in raw_params()) {
        let img = render_params(&raw);
        for (x, y, c) in img.pixels() {
            prop_assert!(c.in_palette(), "({}, {}) = {:?}", x, y, c);
        }
    }

    #[test]
    fn quadrant_symmetry(raw in raw_params()) {
        let img = render_params(&raw);
        for (x, y, c) in img.pixels() {
            let (h, v, d) = mirrors(&img, x, y);
            if c.is_stripe() {
                prop_assert_eq!(d, c);
                prop_assert_eq!(h, c.inverted());
                prop_assert_eq!(v, c.inverted());
            } else {
                prop_assert_eq!(h, c);
                prop_assert_eq!(v, c);
                prop_assert_eq!(d, c);
            }
        }
    }

    #[test]
    fn stripe_colors_balance(raw in raw_params()) {
        let img = render_params(&raw);
        prop_assert_eq!(img.count(Rgb8::BLUE), img.count(Rgb8::RED));
    }

    #[test]
    fn border_is_gray(raw in raw_params()) {
        let img = render_params(&raw);
        let border = img.config().border_width();
        let last = img.width() - 1;
        for (x, y, c) in img.pixels() {
            if x.min(y).min(last - x).min(last - y) < border {
                prop_assert_eq!(c, Rgb8::GRAY, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn deterministic(raw in raw_params()) {
        let (a, b) = (render_params(&raw), render_params(&raw));
        prop_assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn center_lines_mirror(raw in raw_params()) {
        let img = render_params(&raw);
        let h = img.width() / 2;
        for i in 0..img.width() {
            prop_assert_eq!(img.pixel(h, i), img.pixel(h - 1, i).inverted());
            prop_assert_eq!(img.pixel(i, h), img.pixel(i, h - 1).inverted());
        }
    }

    #[test]
    fn wider_border_grays_more(raw in raw_params()) {
        let wider = RawParams { border_width: raw.border_width + 1, ..raw };
        prop_assert!(gray_count(wider) >= gray_count(raw));
    }

    #[test]
    fn rounder_corner_grays_more(raw in raw_params()) {
        let rounder = RawParams { curve_percent: raw.curve_percent + 1, ..raw };
        prop_assert!(gray_count(rounder) >= gray_count(raw));
    }

    #[test]
    fn much_wider_border_grays_more(raw in raw_params(), step in 2i32..=40) {
        let wider = RawParams { border_width: raw.border_width + step, ..raw };
        prop_assert!(gray_count(wider) >= gray_count(raw));
    }

    #[test]
    fn full_curve_grays_at_least_square_corner(raw in raw_params()) {
        let square = RawParams { curve_percent: 0, ..raw };
        let round = RawParams { curve_percent: 99, ..raw };
        let (s, r) = (gray_count(square), gray_count(raw));
        prop_assert!(r >= s);
        prop_assert!(gray_count(round) >= r);
    }

    #[test]
    fn wild_inputs_still_render(
        size in -600i32..600,
        border in -200i32..200,
        curve in any::<i32>(),
        white in -200i32..200,
        red in -200i32..200,
    ) {
        let img = render_params(&RawParams::new(size, border, curve, white, red));
        prop_assert!(img.width() >= 2);
        prop_assert_eq!(img.width() % 2, 0);
        prop_assert!(img.pixels().all(|(_, _, c)| c.in_palette()));
    }
}
