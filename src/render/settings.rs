use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{FireError, FireResult};
use crate::shape::library::SEED_CANVAS_SIZE;

/// Raster settings for one render.
///
/// Loaded from JSON; every field is optional and falls back to the seed library's 512x512
/// canvas over opaque black.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderSettings {
    #[serde(default = "default_size")]
    pub width: u32,
    #[serde(default = "default_size")]
    pub height: u32,
    /// Clear color painted before the flame; `null` leaves the canvas transparent.
    #[serde(default = "default_background")]
    pub background: Option<Rgba8>,
}

fn default_size() -> u32 {
    SEED_CANVAS_SIZE
}

fn default_background() -> Option<Rgba8> {
    Some(Rgba8::BLACK)
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: default_size(),
            height: default_size(),
            background: default_background(),
        }
    }
}

impl RenderSettings {
    pub fn from_reader<R: std::io::Read>(r: R) -> FireResult<Self> {
        let settings: Self = serde_json::from_reader(r)
            .map_err(|e| FireError::validation(format!("parse render settings JSON: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> FireResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FireError::validation(format!("open render settings '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Canvas sizes must be non-zero and fit the rasterizer's `u16` dimensions.
    pub fn validate(&self) -> FireResult<()> {
        for (name, v) in [("width", self.width), ("height", self.height)] {
            if v == 0 {
                return Err(FireError::validation(format!("canvas {name} must be > 0")));
            }
            if v > u32::from(u16::MAX) {
                return Err(FireError::validation(format!(
                    "canvas {name} must be <= {}",
                    u16::MAX
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/settings.rs"]
mod tests;
