// Copyright 2025. Image file I/O for rendered icons and reference images.
//
// BMP and raw RGBA are written by hand so the bytes on disk are exactly the
// rendered pixels; PNG goes through the `image` crate.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{Result, ToolError};
use crate::PixelBuffer;

// ============================================================================
// BMP I/O (32-bit BGRA, top-down)
// ============================================================================

/// Save a pixel buffer as a 32-bit BMP file (top-down, BGRA).
pub fn save_bmp(path: &Path, buf: &PixelBuffer) -> Result<()> {
    let w = buf.width;
    let h = buf.height;
    let row_size = w * 4;
    let image_size = row_size * h;
    let file_size = 14 + 40 + image_size;

    let mut f = BufWriter::new(File::create(path)?);

    // BMP file header (14 bytes)
    f.write_all(b"BM")?;
    f.write_all(&file_size.to_le_bytes())?;
    f.write_all(&[0u8; 4])?; // reserved
    f.write_all(&(14u32 + 40).to_le_bytes())?; // pixel data offset

    // BITMAPINFOHEADER (40 bytes)
    f.write_all(&40u32.to_le_bytes())?; // header size
    f.write_all(&w.to_le_bytes())?; // width
    f.write_all(&(-(h as i32)).to_le_bytes())?; // negative height = top-down
    f.write_all(&1u16.to_le_bytes())?; // planes
    f.write_all(&32u16.to_le_bytes())?; // bits per pixel
    f.write_all(&0u32.to_le_bytes())?; // compression (BI_RGB)
    f.write_all(&image_size.to_le_bytes())?; // image size
    f.write_all(&[0u8; 4])?; // x pixels per meter
    f.write_all(&[0u8; 4])?; // y pixels per meter
    f.write_all(&0u32.to_le_bytes())?; // colors used
    f.write_all(&0u32.to_le_bytes())?; // important colors

    // RGBA -> BGRA
    let mut row = vec![0u8; row_size as usize];
    for src in buf.data.chunks_exact(row_size as usize) {
        for (d, s) in row.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
            d.copy_from_slice(&[s[2], s[1], s[0], s[3]]);
        }
        f.write_all(&row)?;
    }
    f.flush()?;
    Ok(())
}

fn le_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

fn oversized(path: &Path, width: u32, height: u32) -> ToolError {
    ToolError::InvalidImage(format!(
        "{}: dimensions {}x{} overflow",
        path.display(),
        width,
        height
    ))
}

/// Load a BMP file into a pixel buffer. Handles 24-bit and 32-bit BMPs in
/// either row order.
pub fn load_bmp(path: &Path) -> Result<PixelBuffer> {
    let mut data = Vec::new();
    File::open(path)?.read_to_end(&mut data)?;

    if data.len() < 54 || &data[0..2] != b"BM" {
        return Err(ToolError::InvalidImage(format!(
            "{}: not a BMP file",
            path.display()
        )));
    }

    let pixel_offset = le_u32(&data, 10) as usize;
    let w = le_u32(&data, 18) as i32;
    let h = le_u32(&data, 22) as i32;
    let bpp = u16::from_le_bytes([data[28], data[29]]) as usize;
    if bpp != 24 && bpp != 32 {
        return Err(ToolError::InvalidImage(format!(
            "{}: unsupported BMP depth {} (expected 24 or 32)",
            path.display(),
            bpp
        )));
    }

    let width = w.unsigned_abs();
    let height = h.unsigned_abs();
    let top_down = h < 0;
    let bytes_pp = bpp / 8;
    let (row_stride, needed) = (width as usize)
        .checked_mul(bytes_pp)
        .map(|row| row.div_ceil(4) * 4)
        .and_then(|stride| {
            let needed = stride
                .checked_mul(height as usize)?
                .checked_add(pixel_offset)?;
            Some((stride, needed))
        })
        .ok_or_else(|| oversized(path, width, height))?;
    if data.len() < needed {
        return Err(ToolError::InvalidImage(format!(
            "{}: truncated pixel data ({} of {} bytes)",
            path.display(),
            data.len(),
            needed
        )));
    }

    let mut buf = PixelBuffer::new(width, height);
    for y in 0..height {
        let src_y = if top_down { y } else { height - 1 - y };
        let row_offset = pixel_offset + src_y as usize * row_stride;
        for x in 0..width {
            let si = row_offset + x as usize * bytes_pp;
            let a = if bytes_pp == 4 { data[si + 3] } else { 255 };
            buf.set_pixel(x, y, [data[si + 2], data[si + 1], data[si], a]);
        }
    }
    Ok(buf)
}

// ============================================================================
// Raw RGBA I/O (for precise byte-for-byte comparison)
// ============================================================================

/// Save pixel buffer as raw RGBA with a simple header: [width:u32][height:u32][rgba_data].
pub fn save_raw(path: &Path, buf: &PixelBuffer) -> Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    f.write_all(&buf.width.to_le_bytes())?;
    f.write_all(&buf.height.to_le_bytes())?;
    f.write_all(&buf.data)?;
    f.flush()?;
    Ok(())
}

/// Load a raw RGBA file.
pub fn load_raw(path: &Path) -> Result<PixelBuffer> {
    let mut data = Vec::new();
    File::open(path)?.read_to_end(&mut data)?;

    if data.len() < 8 {
        return Err(ToolError::InvalidImage(format!(
            "{}: raw file too small",
            path.display()
        )));
    }

    let width = le_u32(&data, 0);
    let height = le_u32(&data, 4);
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .and_then(|n| n.checked_add(8))
        .ok_or_else(|| oversized(path, width, height))?;

    if data.len() < expected {
        return Err(ToolError::InvalidImage(format!(
            "{}: expected {} bytes, got {}",
            path.display(),
            expected,
            data.len()
        )));
    }

    Ok(PixelBuffer {
        width,
        height,
        data: data[8..expected].to_vec(),
    })
}

// ============================================================================
// PNG I/O
// ============================================================================

pub fn save_png(path: &Path, buf: &PixelBuffer) -> Result<()> {
    let img = image::RgbaImage::from_raw(buf.width, buf.height, buf.data.clone())
        .ok_or_else(|| ToolError::InvalidImage("buffer length does not match dimensions".into()))?;
    img.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

pub fn load_png(path: &Path) -> Result<PixelBuffer> {
    let reader = BufReader::new(File::open(path)?);
    let img = image::load(reader, image::ImageFormat::Png)?.to_rgba8();
    Ok(PixelBuffer {
        width: img.width(),
        height: img.height(),
        data: img.into_raw(),
    })
}

// ============================================================================
// Dispatch by extension
// ============================================================================

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Load an image file, detecting format by extension.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    match extension(path).as_deref() {
        Some("bmp") => load_bmp(path),
        Some("png") => load_png(path),
        Some("raw") | Some("rgba") => load_raw(path),
        _ => Err(ToolError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Save an image file, detecting format by extension.
pub fn save_image(path: &Path, buf: &PixelBuffer) -> Result<()> {
    match extension(path).as_deref() {
        Some("bmp") => save_bmp(path, buf),
        Some("png") => save_png(path, buf),
        Some("raw") | Some("rgba") => save_raw(path, buf),
        _ => Err(ToolError::UnsupportedFormat(path.to_path_buf())),
    }
}
