//! Flame composition: pick seed shapes, bend them into place and paint them in layers.

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::FireResult;
use crate::palette::tier::{Palette, Tier, palette_of, tier_of};
use crate::random::xorshift::Xorshift128;
use crate::render::surface::DrawSurface;
use crate::shape::fire::FireShape;
use crate::shape::library::seed_shapes;
use crate::transform::homography::Homography;
use crate::transform::placement::{Bar, next_bar, solve_placement};

/// Inclusive bounds on how many flame instances a composition holds.
pub const MIN_INSTANCES: i64 = 2;
pub const MAX_INSTANCES: i64 = 4;

/// One flame tongue of a composition.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FlameInstance {
    /// Index into [`seed_shapes`].
    pub seed_index: usize,
    /// Bar and solved transform; `None` for the first instance, which is drawn as authored.
    pub placement: Option<(Bar, Homography)>,
    /// Final geometry, already aligned on the first instance's base.
    pub shape: FireShape,
}

/// The deterministic drawing plan for one identifier/counter pair.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Composition {
    pub instances: Vec<FlameInstance>,
    pub tier: Tier,
    pub palette: Palette,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pivot {
    Centroid,
    Base,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LayerFill {
    White,
    Black,
    Outer,
    Middle,
    Inner,
}

impl LayerFill {
    fn color(self, palette: &Palette) -> Rgba8 {
        match self {
            Self::White => Rgba8::WHITE,
            Self::Black => Rgba8::BLACK,
            Self::Outer => palette.outer,
            Self::Middle => palette.middle,
            Self::Inner => palette.inner,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Layer {
    scale: f64,
    pivot: Pivot,
    fill: LayerFill,
    first_only: bool,
}

// Back to front.
const LAYERS: [Layer; 5] = [
    Layer {
        scale: 1.0,
        pivot: Pivot::Centroid,
        fill: LayerFill::White,
        first_only: false,
    },
    Layer {
        scale: 0.93,
        pivot: Pivot::Centroid,
        fill: LayerFill::Black,
        first_only: false,
    },
    Layer {
        scale: 0.84,
        pivot: Pivot::Centroid,
        fill: LayerFill::Outer,
        first_only: false,
    },
    Layer {
        scale: 0.55,
        pivot: Pivot::Base,
        fill: LayerFill::Middle,
        first_only: false,
    },
    Layer {
        scale: 0.3,
        pivot: Pivot::Base,
        fill: LayerFill::Inner,
        first_only: true,
    },
];

/// Build the composition for `identifier` and `counter` on a canvas `width` pixels wide.
#[tracing::instrument]
pub fn plan_composition(width: u32, identifier: &str, counter: u128) -> FireResult<Composition> {
    let mut rng = Xorshift128::from_identifier(identifier)?;
    let library = seed_shapes();

    let count = rng.next_in_range(MIN_INSTANCES, MAX_INSTANCES + 1);
    let mut instances: Vec<FlameInstance> = Vec::new();
    for _ in 0..count {
        let seed_index = rng.next_in_range(0, library.len() as i64) as usize;
        let chosen = &library[seed_index];
        let instance = match instances.first() {
            None => FlameInstance {
                seed_index,
                placement: None,
                shape: chosen.clone(),
            },
            Some(first) => {
                let anchor = &library[first.seed_index];
                let bar = next_bar(anchor, width, &mut rng);
                let homography = solve_placement(anchor, &bar);
                FlameInstance {
                    seed_index,
                    shape: homography.apply_to_shape(chosen),
                    placement: Some((bar, homography)),
                }
            }
        };
        instances.push(instance);
    }

    if let Some(anchor_x) = instances.first().map(|i| i.shape.base.x) {
        for inst in &mut instances {
            inst.shape = inst.shape.translate(anchor_x - inst.shape.base.x, 0.0);
        }
    }

    let tier = tier_of(counter);
    tracing::debug!(
        count,
        seeds = ?instances.iter().map(|i| i.seed_index).collect::<Vec<_>>(),
        tier = tier.get(),
        "planned composition"
    );

    Ok(Composition {
        instances,
        tier,
        palette: palette_of(tier),
    })
}

/// Paint `comp` onto `surface`: white halo, black outline, outer, middle, then a single inner
/// core for the first instance.
pub fn draw_composition(surface: &mut dyn DrawSurface, comp: &Composition) {
    for layer in &LAYERS {
        let take = if layer.first_only {
            1
        } else {
            comp.instances.len()
        };
        let scaled: Vec<FireShape> = comp
            .instances
            .iter()
            .take(take)
            .map(|inst| {
                let pivot = match layer.pivot {
                    Pivot::Centroid => inst.shape.centroid(),
                    Pivot::Base => inst.shape.base,
                };
                inst.shape.scale_about(pivot.x, pivot.y, layer.scale)
            })
            .collect();

        let Some(anchor) = scaled.first().map(|s| s.base) else {
            continue;
        };
        let color = layer.fill.color(&comp.palette);
        for shape in &scaled {
            let aligned = align_base_x(shape, anchor);
            surface.fill_shape(&aligned, color);
        }
    }
}

fn align_base_x(shape: &FireShape, anchor: Point) -> FireShape {
    shape.translate(anchor.x - shape.base.x, 0.0)
}

/// Render the flame for `identifier` and `counter` onto `surface`.
///
/// `width` bounds the placement of bent instances; the seed shapes were authored for a
/// 512x512 canvas.
#[tracing::instrument(skip(surface))]
pub fn render_image(
    surface: &mut dyn DrawSurface,
    width: u32,
    height: u32,
    identifier: &str,
    counter: u128,
) -> FireResult<()> {
    let comp = plan_composition(width, identifier, counter)?;
    draw_composition(surface, &comp);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
