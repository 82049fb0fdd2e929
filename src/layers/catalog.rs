//! Layer Catalog
//!
//! A fixed registry of layers with stable indices. Stores read from it but
//! never modify it. The standard catalog is built once per process, so every
//! lookup of a name hands out the same layer instance.

use std::sync::OnceLock;

use crate::color::{hsv_to_rgb, Rgb, CHANNEL_MAX};
use crate::error::{LayerError, Result};

use super::layer::{Layer, LayerRef};

// ============================================================================
// Constants
// ============================================================================

/// Names of the standard catalog, in index order
pub const STANDARD_LAYER_NAMES: [&str; 9] = [
    "rainbow", "black", "lighten", "invert", "red", "green", "blue", "sparkle", "darken",
];

/// Channel step used by lighten / darken
const SHADE_STEP: i32 = 40;

/// Hue change per unit of `x + y`, in degrees
const RAINBOW_SPATIAL_STEP: f32 = 20.0;

/// Hue change per timestamp tick, in degrees
const RAINBOW_TEMPORAL_STEP: f32 = 10.0;

/// One pixel in this many sparkles on a given tick
const SPARKLE_DENSITY: u64 = 10;

// ============================================================================
// Transform helpers
// ============================================================================

/// Hue of the rainbow layer at a pixel and time, in `0..360` degrees
pub fn rainbow_hue(timestamp: u64, x: i32, y: i32) -> f32 {
    let spatial = (x + y) as f32 * RAINBOW_SPATIAL_STEP;
    let temporal = (timestamp % 360) as f32 * RAINBOW_TEMPORAL_STEP;
    (spatial + temporal).rem_euclid(360.0)
}

fn rainbow(_base: Rgb, timestamp: u64, x: i32, y: i32) -> Rgb {
    hsv_to_rgb(rainbow_hue(timestamp, x, y), 1.0, 1.0)
}

fn lighten(base: Rgb, _timestamp: u64, _x: i32, _y: i32) -> Rgb {
    base.map(|c| (c + SHADE_STEP).min(CHANNEL_MAX))
}

fn darken(base: Rgb, _timestamp: u64, _x: i32, _y: i32) -> Rgb {
    base.map(|c| (c - SHADE_STEP).max(0))
}

fn invert(base: Rgb, _timestamp: u64, _x: i32, _y: i32) -> Rgb {
    base.inverted()
}

fn sparkle(base: Rgb, timestamp: u64, x: i32, y: i32) -> Rgb {
    // Cheap deterministic scramble of the pixel and tick.
    let h = (x as u64)
        .wrapping_mul(73_856_093)
        .wrapping_add((y as u64).wrapping_mul(19_349_663))
        .wrapping_add(timestamp.wrapping_mul(83_492_791));
    if h % SPARKLE_DENSITY == 0 {
        Rgb::WHITE
    } else {
        base
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Registry of layers, iterated in index order
#[derive(Debug, Clone)]
pub struct LayerCatalog {
    layers: Vec<LayerRef>,
}

impl LayerCatalog {
    /// Build a catalog from arbitrary layers, ordered by their index
    pub fn new(layers: Vec<Layer>) -> Self {
        let mut layers: Vec<LayerRef> = layers.into_iter().map(Layer::into_ref).collect();
        layers.sort_by_key(|l| l.index());
        Self { layers }
    }

    /// The standard nine-layer catalog, shared by the whole process
    pub fn standard() -> &'static LayerCatalog {
        static STANDARD: OnceLock<LayerCatalog> = OnceLock::new();
        STANDARD.get_or_init(Self::build_standard)
    }

    fn build_standard() -> Self {
        Self::new(vec![
            Layer::new(0, "rainbow", Rgb::new(60, 60, 60), rainbow),
            Layer::flat(1, "black", Rgb::BLACK),
            Layer::new(2, "lighten", Rgb::new(SHADE_STEP, SHADE_STEP, SHADE_STEP), lighten),
            Layer::new(3, "invert", Rgb::BLACK, invert),
            Layer::flat(4, "red", Rgb::new(255, 0, 0)),
            Layer::flat(5, "green", Rgb::new(0, 255, 0)),
            Layer::flat(6, "blue", Rgb::new(0, 0, 255)),
            Layer::new(7, "sparkle", Rgb::new(20, 20, 20), sparkle),
            Layer::new(
                8,
                "darken",
                Rgb::new(-SHADE_STEP, -SHADE_STEP, -SHADE_STEP),
                darken,
            ),
        ])
    }

    /// Look up a layer by its catalog index
    pub fn get(&self, index: usize) -> Option<&LayerRef> {
        self.layers.iter().find(|l| l.index() == index)
    }

    /// Look up a layer by name
    pub fn by_name(&self, name: &str) -> Result<&LayerRef> {
        self.layers
            .iter()
            .find(|l| l.name() == name)
            .ok_or_else(|| LayerError::UnknownLayer {
                name: name.to_string(),
            })
    }

    /// Iterate over layers in index order
    pub fn iter(&self) -> impl Iterator<Item = &LayerRef> {
        self.layers.iter()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Default for LayerCatalog {
    fn default() -> Self {
        Self::standard().clone()
    }
}
