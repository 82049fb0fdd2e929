//! Sequence Layer Store
//!
//! Each layer is either applied or not, and applied layers are always
//! visited in ascending catalog index. `special` removes the layer whose
//! name is the median of the stored names.

use log::{debug, warn};

use crate::color::Rgb;
use crate::error::{LayerError, Result};
use crate::layers::{Layer, LayerRef};

/// Maximum number of layers a sequence store holds
pub const SEQUENCE_CAPACITY: usize = 100;

// ============================================================================
// Stateless helpers
// ============================================================================

/// Outcome of a sequence render
#[derive(Debug, Clone, Copy)]
pub struct Visible<'a> {
    /// The displayed color
    pub color: Rgb,
    /// The last layer that changed the color, if any
    pub layer: Option<&'a LayerRef>,
}

/// Render `layers` (already sorted by index) over `start`
///
/// Layers whose activation thresholds are not met are skipped. Scanning in
/// index order, a layer is selected only when its output differs from the
/// running color; a layer that renders the same color leaves the selection
/// with the earlier layer. With no active layer the result is `start`.
pub fn resolve_visible(
    layers: &[LayerRef],
    start: Rgb,
    timestamp: u64,
    x: i32,
    y: i32,
) -> Visible<'_> {
    let mut visible = Visible {
        color: start,
        layer: None,
    };

    for layer in layers.iter().filter(|l| l.is_active(start, timestamp)) {
        let rendered = layer.apply(visible.color, timestamp, x, y);
        if visible.layer.is_none() || rendered != visible.color {
            visible = Visible {
                color: rendered,
                layer: Some(layer),
            };
        }
    }

    visible
}

/// The layer with the median name
///
/// Names are compared lexicographically. With an even count the smaller of
/// the two middle names wins. `None` for an empty slice.
pub fn median_by_name(layers: &[LayerRef]) -> Option<&LayerRef> {
    if layers.is_empty() {
        return None;
    }
    let mut by_name: Vec<&LayerRef> = layers.iter().collect();
    by_name.sort_by(|a, b| a.name().cmp(b.name()));
    Some(by_name[(by_name.len() - 1) / 2])
}

// ============================================================================
// Sequence Layer Store
// ============================================================================

/// Index-ordered set of layers
#[derive(Debug, Clone)]
pub struct SequenceLayerStore {
    /// Sorted by `index`, ascending; no layer appears twice
    layers: Vec<LayerRef>,
    capacity: usize,
}

impl SequenceLayerStore {
    /// Create an empty store with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(SEQUENCE_CAPACITY)
    }

    /// Create an empty store holding at most `capacity` layers
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layers: Vec::new(),
            capacity,
        }
    }

    /// Ensure `layer` is applied
    ///
    /// # Returns
    /// `Ok(false)` if this exact layer is already stored.
    ///
    /// # Errors
    /// `CapacityExceeded` when the store is full.
    pub fn add(&mut self, layer: LayerRef) -> Result<bool> {
        if self.contains(&layer) {
            return Ok(false);
        }
        self.ensure_room(&layer)
            .inspect_err(|_| warn!("sequence store full, rejecting {}", layer.name()))?;

        let position = self.layers.partition_point(|l| l.index() <= layer.index());
        self.layers.insert(position, layer);
        Ok(true)
    }

    /// Fail with `CapacityExceeded` if adding `layer` would overflow
    ///
    /// A layer that is already stored always fits.
    pub fn ensure_room(&self, layer: &LayerRef) -> Result<()> {
        if !self.contains(layer) && self.layers.len() >= self.capacity {
            return Err(LayerError::CapacityExceeded {
                store: "sequence",
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Ensure `layer` is not applied
    ///
    /// # Returns
    /// `true` if it was stored and has been removed.
    pub fn erase(&mut self, layer: &LayerRef) -> bool {
        match self.layers.iter().position(|l| Layer::same(l, layer)) {
            Some(position) => {
                self.layers.remove(position);
                true
            }
            None => false,
        }
    }

    /// The displayed color; see [`resolve_visible`]
    pub fn get_color(&self, start: Rgb, timestamp: u64, x: i32, y: i32) -> Rgb {
        resolve_visible(&self.layers, start, timestamp, x, y).color
    }

    /// The layer responsible for the displayed color, if any
    pub fn visible_layer(&self, start: Rgb, timestamp: u64, x: i32, y: i32) -> Option<&LayerRef> {
        resolve_visible(&self.layers, start, timestamp, x, y).layer
    }

    /// Remove the layer with the median name
    pub fn special(&mut self) {
        if let Some(median) = median_by_name(&self.layers).cloned() {
            debug!("sequence store: removing median {}", median.name());
            self.erase(&median);
        }
    }

    /// Whether this exact layer is stored
    pub fn contains(&self, layer: &LayerRef) -> bool {
        self.layers.iter().any(|l| Layer::same(l, layer))
    }

    /// Iterate over layers in index order
    pub fn layers(&self) -> impl Iterator<Item = &LayerRef> {
        self.layers.iter()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Default for SequenceLayerStore {
    fn default() -> Self {
        Self::new()
    }
}
