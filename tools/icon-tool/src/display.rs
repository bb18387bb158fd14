// Copyright 2025. Presentation helpers: integer zoom and the preview frame.
//
// These never touch the icon's own pixels; the rasterizer output stays
// pixel-exact and the host magnifies a copy.

use crate::PixelBuffer;

/// Largest zoom factor a host offers.
pub const MAX_ZOOM: u32 = 49;

/// Color of the one-pixel outline drawn around a previewed icon.
pub const FRAME_COLOR: [u8; 4] = [128, 128, 128, 255];

/// Nearest-neighbor magnification by an integer factor.
///
/// A factor of 0 is treated as 1.
pub fn zoom(src: &PixelBuffer, factor: u32) -> PixelBuffer {
    let f = factor.max(1);
    if f == 1 {
        return src.clone();
    }
    let mut out = PixelBuffer::new(src.width * f, src.height * f);
    let row_bytes = out.width as usize * 4;
    for y in 0..src.height {
        let dst_y = (y * f) as usize;
        {
            let row = &mut out.data[dst_y * row_bytes..(dst_y + 1) * row_bytes];
            for x in 0..src.width {
                let p = src.pixel(x, y);
                let start = (x * f) as usize * 4;
                for d in row[start..start + f as usize * 4].chunks_exact_mut(4) {
                    d.copy_from_slice(&p);
                }
            }
        }
        // Repeat the finished row for the rest of the block.
        for k in 1..f as usize {
            out.data
                .copy_within(dst_y * row_bytes..(dst_y + 1) * row_bytes, (dst_y + k) * row_bytes);
        }
    }
    out
}

/// Surround the buffer with a one-pixel [`FRAME_COLOR`] outline.
pub fn frame(src: &PixelBuffer) -> PixelBuffer {
    let mut out = PixelBuffer::filled(src.width + 2, src.height + 2, FRAME_COLOR);
    for y in 0..src.height {
        for x in 0..src.width {
            out.set_pixel(x + 1, y + 1, src.pixel(x, y));
        }
    }
    out
}
