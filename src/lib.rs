//! Layerpaint - Per-pixel Layer Stores
//!
//! A grid of pixels where each pixel holds a stack of named layers (color
//! transformations) that combine into the displayed color.
//!
//! # Architecture
//!
//! Every grid cell owns one layer store, chosen by the grid's draw style:
//! - Set: a single active layer; special inverts its output
//! - Additive: layers in add order with summed colors; special rotates
//! - Sequence: layers applied in index order; special drops the median name
//!
//! Layers come from a fixed [`LayerCatalog`](layers::LayerCatalog) and are
//! shared by reference between stores.

pub mod cli;
pub mod color;
pub mod error;
pub mod grid;
pub mod layers;
pub mod store;

pub use color::Rgb;
pub use error::{LayerError, Result};
pub use grid::{Grid, GridConfig};
pub use layers::{Layer, LayerCatalog, LayerRef};
pub use store::{DrawStyle, EraseTarget, LayerStore};
