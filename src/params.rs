//! Render parameters: raw host input and the normalized configuration.
//!
//! A host collects five integers (usually from sliders or flags) into
//! [`RawParams`]. [`RenderConfig::normalize`] turns any combination of them
//! into a configuration the rasterizer can consume; it clamps and never
//! rejects.

use std::ops::RangeInclusive;

/// Unsanitized render parameters as supplied by a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawParams {
    /// Full image edge length in pixels.
    pub icon_size: i32,
    /// Gray margin thickness.
    pub border_width: i32,
    /// Corner roundness, as a percentage of the available radius.
    pub curve_percent: i32,
    /// White separator thickness.
    pub white_width: i32,
    /// Colored stripe thickness.
    pub red_width: i32,
}

impl RawParams {
    /// Bundle five raw values in host order.
    pub fn new(
        icon_size: i32,
        border_width: i32,
        curve_percent: i32,
        white_width: i32,
        red_width: i32,
    ) -> Self {
        Self {
            icon_size,
            border_width,
            curve_percent,
            white_width,
            red_width,
        }
    }
}

impl Default for RawParams {
    fn default() -> Self {
        Self::new(
            ICON_SIZE.default,
            BORDER_WIDTH.default,
            CURVE_PERCENT.default,
            WHITE_WIDTH.default,
            RED_WIDTH.default,
        )
    }
}

// ============================================================================
// Host-side ranges
// ============================================================================

/// Range and default a host control is expected to offer for one parameter.
///
/// The rasterizer does not enforce these beyond what normalization clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamRange {
    /// Smallest value offered.
    pub min: i32,
    /// Largest value offered.
    pub max: i32,
    /// Initial value.
    pub default: i32,
}

impl ParamRange {
    /// `min..=max` widened for argument parsers that validate in `i64`.
    pub fn bounds(&self) -> RangeInclusive<i64> {
        self.min as i64..=self.max as i64
    }
}

pub const ICON_SIZE: ParamRange = ParamRange {
    min: 16,
    max: 512,
    default: 256,
};
pub const BORDER_WIDTH: ParamRange = ParamRange {
    min: 0,
    max: 99,
    default: 8,
};
pub const CURVE_PERCENT: ParamRange = ParamRange {
    min: 0,
    max: 99,
    default: 70,
};
pub const WHITE_WIDTH: ParamRange = ParamRange {
    min: 0,
    max: 99,
    default: 12,
};
pub const RED_WIDTH: ParamRange = ParamRange {
    min: 1,
    max: 99,
    default: 18,
};

// ============================================================================
// RenderConfig
// ============================================================================

/// Normalized render configuration.
///
/// Guarantees, for every value obtainable from [`RenderConfig::normalize`]:
///
/// - `icon_size` is even and at least 2
/// - `0 <= border_width <= icon_size / 2`
/// - `white_width` is even and non-negative
/// - `red_width >= 1`
///
/// `curve_percent` is carried as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    icon_size: u32,
    border_width: u32,
    curve_percent: i32,
    white_width: u32,
    red_width: u32,
}

impl RenderConfig {
    /// Sanitize raw parameters. Rules apply in this order:
    ///
    /// 1. `icon_size` rounds down to even (minimum 2).
    /// 2. `red_width` is at least 1, so the stripe loop always advances.
    /// 3. `white_width` rounds down to even (minimum 0); half of it sits on
    ///    each side of the center line.
    /// 4. `border_width` is clamped to `[0, icon_size / 2]`.
    /// 5. `curve_percent` passes through.
    pub fn normalize(raw: &RawParams) -> Self {
        let icon_size = (raw.icon_size - raw.icon_size % 2).max(2) as u32;
        let red_width = raw.red_width.max(1) as u32;
        let white_width = (raw.white_width - raw.white_width % 2).max(0) as u32;
        let border_width = raw.border_width.clamp(0, (icon_size / 2) as i32) as u32;
        Self {
            icon_size,
            border_width,
            curve_percent: raw.curve_percent,
            white_width,
            red_width,
        }
    }

    /// Edge length of the square image; even, at least 2.
    pub fn icon_size(&self) -> u32 {
        self.icon_size
    }

    /// Gray margin, at most [`half`](Self::half).
    pub fn border_width(&self) -> u32 {
        self.border_width
    }

    /// Corner roundness exactly as the host gave it.
    pub fn curve_percent(&self) -> i32 {
        self.curve_percent
    }

    /// Separator width; even.
    pub fn white_width(&self) -> u32 {
        self.white_width
    }

    /// Stripe width; at least 1.
    pub fn red_width(&self) -> u32 {
        self.red_width
    }

    /// Edge length of one quadrant.
    pub fn half(&self) -> u32 {
        self.icon_size / 2
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::normalize(&RawParams::default())
    }
}

impl std::fmt::Display for RenderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "size={} border={} curve={}% white={} red={}",
            self.icon_size, self.border_width, self.curve_percent, self.white_width, self.red_width
        )
    }
}
