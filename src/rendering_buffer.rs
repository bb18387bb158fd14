//! Rendering buffer: row-oriented access to an owned block of pixel bytes.
//!
//! Rows are stored top-down and tightly packed (`stride = width * bpp`), so the
//! finished buffer can be handed to a host as a plain row-major byte vector.

/// Owned, row-major pixel storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderingBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    stride: usize,
}

impl RenderingBuffer {
    /// Allocate a zeroed buffer of `width x height` pixels, `bpp` bytes each.
    pub fn new(width: u32, height: u32, bpp: usize) -> Self {
        let stride = width as usize * bpp;
        Self {
            data: vec![0u8; stride * height as usize],
            width,
            height,
            stride,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Get an immutable slice for row `y`.
    pub fn row_slice(&self, y: u32) -> &[u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let start = y as usize * self.stride;
        &self.data[start..start + self.stride]
    }

    /// Get a mutable slice for row `y`.
    pub fn row_slice_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let start = y as usize * self.stride;
        &mut self.data[start..start + self.stride]
    }

    /// The whole buffer, rows concatenated top to bottom.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}
