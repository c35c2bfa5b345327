use crate::foundation::error::FireResult;
use crate::render::compose::render_image;
use crate::render::cpu::{CpuSurface, FrameRGBA};
use crate::render::encode::encode_png;
use crate::render::settings::RenderSettings;

/// Validate `settings`, then rasterize the flame for `identifier` and `counter`.
///
/// Returns a [`FrameRGBA`] containing **premultiplied** RGBA8 pixels.
#[tracing::instrument(skip(settings), fields(width = settings.width, height = settings.height))]
pub fn render_frame(
    settings: &RenderSettings,
    identifier: &str,
    counter: u128,
) -> FireResult<FrameRGBA> {
    settings.validate()?;
    let mut surface = CpuSurface::new(settings.width, settings.height, settings.background)?;
    render_image(
        &mut surface,
        settings.width,
        settings.height,
        identifier,
        counter,
    )?;
    Ok(surface.finish())
}

/// [`render_frame`] followed by [`encode_png`].
#[tracing::instrument(skip(settings))]
pub fn render_png(settings: &RenderSettings, identifier: &str, counter: u128) -> FireResult<Vec<u8>> {
    let frame = render_frame(settings, identifier, counter)?;
    encode_png(&frame)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
