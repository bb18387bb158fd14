// Copyright 2025. Host-side support for the stripe icon rasterizer.
//
// Provides the RGBA pixel buffer the host works in, buffer comparison and diff
// images, display zoom, file I/O and clipboard export.

pub mod clipboard;
pub mod display;
pub mod error;
pub mod image_io;
pub mod logging;

pub use error::{Result, ToolError};
pub use image_io::{load_image, save_image};

use stripe_icon::Image;

// ============================================================================
// Pixel Buffer
// ============================================================================

/// An RGBA pixel buffer with dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    /// RGBA pixel data, row-major, top-to-bottom. Length = width * height * 4.
    pub data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * 4],
        }
    }

    /// A buffer filled with one RGBA color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut buf = Self::new(width, height);
        for p in buf.data.chunks_exact_mut(4) {
            p.copy_from_slice(&rgba);
        }
        buf
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&rgba);
    }
}

impl From<&Image> for PixelBuffer {
    fn from(img: &Image) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            data: img.to_rgba_bytes(),
        }
    }
}

// ============================================================================
// Comparison Result
// ============================================================================

/// Information about a single pixel difference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    pub x: u32,
    pub y: u32,
    pub pixel_a: [u8; 4],
    pub pixel_b: [u8; 4],
}

/// Result of comparing two pixel buffers.
#[derive(Debug, Clone)]
pub struct CompareResult {
    /// True if every pixel in both buffers is identical.
    pub identical: bool,
    /// Total number of pixels compared.
    pub total_pixels: u64,
    /// Number of pixels that differ by at least 1 in any channel.
    pub different_pixels: u64,
    /// Maximum absolute difference across any single channel of any pixel.
    pub max_channel_diff: u8,
    /// The first differing pixel found (scanning left-to-right, top-to-bottom).
    pub first_diff: Option<DiffInfo>,
}

impl std::fmt::Display for CompareResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.identical {
            write!(f, "IDENTICAL: {} pixels match perfectly", self.total_pixels)
        } else {
            write!(
                f,
                "DIFFERENT: {}/{} pixels differ ({:.2}%), max_diff={}",
                self.different_pixels,
                self.total_pixels,
                self.different_pixels as f64 / self.total_pixels as f64 * 100.0,
                self.max_channel_diff,
            )?;
            if let Some(ref d) = self.first_diff {
                write!(
                    f,
                    "\n  First diff at ({}, {}): A={:?} B={:?}",
                    d.x, d.y, d.pixel_a, d.pixel_b
                )?;
            }
            Ok(())
        }
    }
}

// ============================================================================
// Buffer Comparison
// ============================================================================

fn check_same_size(a: &PixelBuffer, b: &PixelBuffer) -> Result<()> {
    if a.width != b.width || a.height != b.height {
        return Err(ToolError::SizeMismatch {
            a_width: a.width,
            a_height: a.height,
            b_width: b.width,
            b_height: b.height,
        });
    }
    Ok(())
}

/// Compare two RGBA pixel buffers byte-by-byte. Alpha is ignored, since
/// icons are always opaque and 24-bit references carry no alpha.
pub fn compare_buffers(a: &PixelBuffer, b: &PixelBuffer) -> Result<CompareResult> {
    check_same_size(a, b)?;

    let mut different_pixels = 0u64;
    let mut max_channel_diff = 0u8;
    let mut first_diff: Option<DiffInfo> = None;

    for y in 0..a.height {
        for x in 0..a.width {
            let pa = a.pixel(x, y);
            let pb = b.pixel(x, y);
            let diff = (0..3)
                .map(|c| pa[c].abs_diff(pb[c]))
                .max()
                .unwrap_or(0);
            if diff > 0 {
                different_pixels += 1;
                max_channel_diff = max_channel_diff.max(diff);
                if first_diff.is_none() {
                    first_diff = Some(DiffInfo {
                        x,
                        y,
                        pixel_a: pa,
                        pixel_b: pb,
                    });
                }
            }
        }
    }

    Ok(CompareResult {
        identical: different_pixels == 0,
        total_pixels: a.width as u64 * a.height as u64,
        different_pixels,
        max_channel_diff,
        first_diff,
    })
}

/// Generate a visual diff image highlighting pixel differences.
///
/// - Identical pixels are shown as dark gray.
/// - Different pixels are shown in bright red. Icons only ever contain four
///   colors, so any difference is a wrong color, not a rounding error.
pub fn generate_diff_image(a: &PixelBuffer, b: &PixelBuffer) -> Result<PixelBuffer> {
    check_same_size(a, b)?;

    let mut diff = PixelBuffer::new(a.width, a.height);
    for y in 0..a.height {
        for x in 0..a.width {
            let same = a.pixel(x, y)[..3] == b.pixel(x, y)[..3];
            let c = if same { [40, 40, 40, 255] } else { [255, 0, 0, 255] };
            diff.set_pixel(x, y, c);
        }
    }
    Ok(diff)
}

/// Generate a side-by-side comparison image: [A | Diff | B]
pub fn generate_sidebyside(a: &PixelBuffer, b: &PixelBuffer) -> Result<PixelBuffer> {
    let diff = generate_diff_image(a, b)?;
    let mut out = PixelBuffer::new(a.width * 3, a.height);

    for y in 0..a.height {
        for x in 0..a.width {
            out.set_pixel(x, y, a.pixel(x, y));
            out.set_pixel(a.width + x, y, diff.pixel(x, y));
            out.set_pixel(a.width * 2 + x, y, b.pixel(x, y));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stripe_icon::{render, Rgb8};

    #[test]
    fn test_from_image() {
        let img = render(16, 2, 0, 0, 4);
        let buf = PixelBuffer::from(&img);
        assert_eq!(buf.width, 16);
        assert_eq!(buf.data.len(), 16 * 16 * 4);
        assert_eq!(buf.pixel(0, 0), Rgb8::GRAY.to_rgba());
        assert_eq!(buf.pixel(7, 7), Rgb8::BLUE.to_rgba());
    }

    #[test]
    fn test_compare_identical() {
        let a = PixelBuffer::from(&render(32, 4, 50, 2, 3));
        let r = compare_buffers(&a, &a.clone()).unwrap();
        assert!(r.identical);
        assert_eq!(r.total_pixels, 1024);
        assert!(r.to_string().starts_with("IDENTICAL"));
    }

    #[test]
    fn test_compare_reports_first_diff() {
        let a = PixelBuffer::from(&render(32, 4, 50, 2, 3));
        let mut b = a.clone();
        b.set_pixel(5, 9, [0, 0, 0, 255]);
        b.set_pixel(20, 20, [0, 0, 0, 255]);
        let r = compare_buffers(&a, &b).unwrap();
        assert!(!r.identical);
        assert_eq!(r.different_pixels, 2);
        let first = r.first_diff.unwrap();
        assert_eq!((first.x, first.y), (5, 9));
    }

    #[test]
    fn test_compare_ignores_alpha() {
        let a = PixelBuffer::filled(4, 4, [1, 2, 3, 255]);
        let b = PixelBuffer::filled(4, 4, [1, 2, 3, 0]);
        assert!(compare_buffers(&a, &b).unwrap().identical);
    }

    #[test]
    fn test_compare_size_mismatch() {
        let a = PixelBuffer::new(4, 4);
        let b = PixelBuffer::new(4, 5);
        assert!(matches!(
            compare_buffers(&a, &b),
            Err(ToolError::SizeMismatch { b_height: 5, .. })
        ));
    }

    #[test]
    fn test_different_params_differ() {
        let a = PixelBuffer::from(&render(32, 4, 50, 2, 3));
        let b = PixelBuffer::from(&render(32, 4, 51, 2, 3));
        let c = PixelBuffer::from(&render(32, 4, 50, 4, 3));
        assert!(compare_buffers(&a, &c).unwrap().different_pixels > 0);
        // 50% and 51% of 12 both round to a radius of 6
        assert!(compare_buffers(&a, &b).unwrap().identical);
    }

    #[test]
    fn test_diff_and_sidebyside() {
        let a = PixelBuffer::filled(3, 2, [255, 255, 255, 255]);
        let mut b = a.clone();
        b.set_pixel(1, 1, [0, 0, 128, 255]);
        let d = generate_diff_image(&a, &b).unwrap();
        assert_eq!(d.pixel(0, 0), [40, 40, 40, 255]);
        assert_eq!(d.pixel(1, 1), [255, 0, 0, 255]);

        let s = generate_sidebyside(&a, &b).unwrap();
        assert_eq!((s.width, s.height), (9, 2));
        assert_eq!(s.pixel(1, 1), [255, 255, 255, 255]);
        assert_eq!(s.pixel(4, 1), [255, 0, 0, 255]);
        assert_eq!(s.pixel(7, 1), [0, 0, 128, 255]);
    }
}
