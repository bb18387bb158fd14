//! Color type and the icon palette.
//!
//! The rasterizer works with exactly four opaque RGB triples. Stripe
//! inversion is keyed on exact equality, which is only sound because nothing
//! ever blends or interpolates between them.

// ============================================================================
// Component orders (for pixel format layer)
// ============================================================================

/// RGB component order: R=0, G=1, B=2
pub struct OrderRgb;
impl OrderRgb {
    pub const R: usize = 0;
    pub const G: usize = 1;
    pub const B: usize = 2;
    pub const N: usize = 3;
}

/// RGBA component order: R=0, G=1, B=2, A=3
pub struct OrderRgba;
impl OrderRgba {
    pub const R: usize = 0;
    pub const G: usize = 1;
    pub const B: usize = 2;
    pub const A: usize = 3;
    pub const N: usize = 4;
}

// ============================================================================
// Rgb8
// ============================================================================

/// Opaque color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Background between stripes, inside the rounded region.
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
    /// Medium blue; the first (outermost-drawn) stripe color.
    pub const BLUE: Rgb8 = Rgb8::new(0, 0, 128);
    /// Medium red; alternates with blue.
    pub const RED: Rgb8 = Rgb8::new(128, 0, 0);
    /// Border margin and everything outside the corner arcs.
    pub const GRAY: Rgb8 = Rgb8::new(204, 204, 204);

    /// All colors a rendered icon may contain.
    pub const PALETTE: [Rgb8; 4] = [Self::WHITE, Self::BLUE, Self::RED, Self::GRAY];

    /// Swap blue and red; every other color maps to itself.
    #[inline]
    pub fn inverted(self) -> Self {
        if self == Self::BLUE {
            Self::RED
        } else if self == Self::RED {
            Self::BLUE
        } else {
            self
        }
    }

    /// True for the two stripe colors.
    #[inline]
    pub fn is_stripe(self) -> bool {
        self == Self::BLUE || self == Self::RED
    }

    /// True if the color is one of the four palette entries.
    pub fn in_palette(self) -> bool {
        Self::PALETTE.contains(&self)
    }

    /// Components as `[r, g, b, 255]`.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[OrderRgb::R], c[OrderRgb::G], c[OrderRgb::B])
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(c: Rgb8) -> Self {
        [c.r, c.g, c.b]
    }
}
