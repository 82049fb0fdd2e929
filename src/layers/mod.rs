//! Layer Module
//!
//! Layers are immutable, named color transformations. They are owned by a
//! [`LayerCatalog`] and shared with the per-cell stores as [`LayerRef`]s.

mod catalog;
mod layer;

pub use catalog::{rainbow_hue, LayerCatalog, STANDARD_LAYER_NAMES};
pub use layer::{Activation, ApplyFn, Layer, LayerRef};
