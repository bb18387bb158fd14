// Copyright 2025. System clipboard export.
//
// Only available with the `clipboard` feature; without it, copying reports
// that the clipboard is unavailable instead of failing to build.

use crate::error::{Result, ToolError};
use crate::PixelBuffer;

/// Place the buffer on the system clipboard as an RGBA image.
///
/// On Linux the X11 and Wayland selections are served by the process that
/// set them, so this blocks until another client (usually a clipboard
/// manager, or the next copy) takes ownership. Elsewhere it returns as soon
/// as the image is stored.
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(buf: &PixelBuffer) -> Result<()> {
    use std::borrow::Cow;

    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ToolError::Clipboard(e.to_string()))?;
    let image = arboard::ImageData {
        width: buf.width as usize,
        height: buf.height as usize,
        bytes: Cow::Borrowed(&buf.data),
    };

    #[cfg(target_os = "linux")]
    let stored = {
        use arboard::SetExtLinux;
        tracing::info!("serving clipboard until another application takes it");
        clipboard.set().wait().image(image)
    };
    #[cfg(not(target_os = "linux"))]
    let stored = clipboard.set_image(image);

    stored.map_err(|e| ToolError::Clipboard(e.to_string()))?;
    tracing::debug!(width = buf.width, height = buf.height, "image placed on clipboard");
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(_buf: &PixelBuffer) -> Result<()> {
    Err(ToolError::Clipboard(
        "built without the `clipboard` feature".into(),
    ))
}
