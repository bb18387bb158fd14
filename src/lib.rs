//! # stripe-icon
//!
//! Deterministic rasterizer for a square icon of concentric blue and red
//! stripes on white, cut to a rounded rectangle inside a gray margin.
//!
//! The icon is built from a single quadrant:
//!
//! 1. **Stripes**: white background and nested L-shaped stripes in the
//!    top-left quadrant
//! 2. **Corner mask**: gray border strip and rounded outer corner, integer
//!    arithmetic only
//! 3. **Mirror**: the quadrant reflected into the other three, with blue and
//!    red swapped in the top-right and bottom-left
//!
//! Only four colors ever appear (see [`color::Rgb8::PALETTE`]); there is no
//! anti-aliasing and no blending.
//!
//! ```
//! use stripe_icon::{render, Rgb8};
//!
//! let icon = render(256, 8, 70, 12, 18);
//! assert_eq!(icon.width(), 256);
//! assert_eq!(icon.pixel(0, 0), Rgb8::GRAY);
//! ```

// Pixel plumbing
pub mod basics;
pub mod color;
pub mod pixfmt_rgb;
pub mod pixfmt_rgba;
pub mod renderer_base;
pub mod rendering_buffer;

// Rasterizer stages
pub mod corner_mask;
pub mod icon;
pub mod image;
pub mod mirror;
pub mod params;
pub mod stripes;

pub use color::Rgb8;
pub use icon::{render, render_config, render_params};
pub use image::Image;
pub use params::{RawParams, RenderConfig};
