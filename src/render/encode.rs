//! PNG output for rendered frames.

use std::io::Cursor;
use std::path::Path;

use crate::foundation::error::{FireError, FireResult};
use crate::foundation::math::unpremultiply_in_place;
use crate::render::cpu::FrameRGBA;

/// Encode `frame` as a straight-alpha PNG.
pub fn encode_png(frame: &FrameRGBA) -> FireResult<Vec<u8>> {
    let mut data = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_in_place(&mut data);
    }
    let img = image::RgbaImage::from_raw(frame.width, frame.height, data).ok_or_else(|| {
        FireError::encode(format!(
            "frame buffer does not match {}x{} RGBA8",
            frame.width, frame.height
        ))
    })?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| FireError::encode(format!("png: {e}")))?;
    Ok(buf)
}

/// Encode `frame` and write it to `path`, creating parent directories as needed.
pub fn write_png(frame: &FrameRGBA, path: impl AsRef<Path>) -> FireResult<()> {
    let path = path.as_ref();
    let bytes = encode_png(frame)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            FireError::encode(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    std::fs::write(path, bytes)
        .map_err(|e| FireError::encode(format!("write png '{}': {e}", path.display())))?;
    tracing::debug!(path = %path.display(), "wrote png");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/encode.rs"]
mod tests;
