//! Additive Layer Store
//!
//! Layers are kept in add order (oldest first) and their flat colors are
//! summed onto the background. The same layer may be added many times.
//!
//! Erase is **positional**: callers pass the index within the current add
//! order, not a layer. This differs from the set and sequence stores and is
//! the caller's responsibility to track.

use std::collections::VecDeque;

use log::{debug, warn};

use crate::color::Rgb;
use crate::error::{LayerError, Result};
use crate::layers::LayerRef;

/// Maximum number of layers an additive store holds
pub const ADDITIVE_CAPACITY: usize = 100;

/// Add-order layer store with summed colors
#[derive(Debug, Clone)]
pub struct AdditiveLayerStore {
    layers: VecDeque<LayerRef>,
    capacity: usize,
}

impl AdditiveLayerStore {
    /// Create an empty store with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(ADDITIVE_CAPACITY)
    }

    /// Create an empty store holding at most `capacity` layers
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layers: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `layer` as the most recent addition
    ///
    /// # Errors
    /// `CapacityExceeded` when the store is full; the store is left unchanged.
    pub fn add(&mut self, layer: LayerRef) -> Result<bool> {
        self.ensure_room()
            .inspect_err(|_| warn!("additive store full, rejecting {}", layer.name()))?;
        self.layers.push_back(layer);
        Ok(true)
    }

    /// Fail with `CapacityExceeded` if one more layer would not fit
    pub fn ensure_room(&self) -> Result<()> {
        if self.layers.len() >= self.capacity {
            return Err(LayerError::CapacityExceeded {
                store: "additive",
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Remove the layer at `position` in add order (0 = oldest)
    ///
    /// # Returns
    /// `false` when `position` is out of range.
    pub fn erase(&mut self, position: usize) -> bool {
        match self.layers.remove(position) {
            Some(layer) => {
                debug!("additive store: erased {} at {}", layer.name(), position);
                true
            }
            None => false,
        }
    }

    /// `start` plus every layer's flat color, unclamped
    pub fn get_color(&self, start: Rgb, _timestamp: u64, _x: i32, _y: i32) -> Rgb {
        self.layers.iter().fold(start, |acc, layer| acc + layer.color())
    }

    /// Move the oldest layer to the newest position
    pub fn special(&mut self) {
        if self.layers.len() > 1 {
            self.layers.rotate_left(1);
        }
    }

    /// Iterate over layers in add order
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

impl Default for AdditiveLayerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::Layer;

    fn layer(index: usize, name: &str, color: Rgb) -> LayerRef {
        Layer::flat(index, name, color).into_ref()
    }

    fn names(store: &AdditiveLayerStore) -> Vec<&str> {
        store.layers().map(|l| l.name()).collect()
    }

    #[test]
    fn test_color_sums_layers() {
        let mut store = AdditiveLayerStore::new();
        store.add(layer(0, "a", Rgb::new(10, 0, 0))).unwrap();
        store.add(layer(1, "b", Rgb::new(0, 20, 0))).unwrap();
        store.add(layer(0, "a2", Rgb::new(10, 0, 300))).unwrap();

        assert_eq!(store.get_color(Rgb::new(1, 1, 1), 0, 0, 0), Rgb::new(21, 21, 301));
    }

    #[test]
    fn test_same_layer_added_twice() {
        let a = layer(0, "a", Rgb::new(5, 5, 5));
        let mut store = AdditiveLayerStore::new();
        assert!(store.add(a.clone()).unwrap());
        assert!(store.add(a).unwrap());
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_color(Rgb::BLACK, 0, 0, 0), Rgb::new(10, 10, 10));
    }

    #[test]
    fn test_erase_by_position_keeps_order() {
        let mut store = AdditiveLayerStore::new();
        for (i, name) in ["a", "b", "c"].iter().enumerate() {
            store.add(layer(i, name, Rgb::BLACK)).unwrap();
        }

        assert!(store.erase(1));
        assert_eq!(names(&store), vec!["a", "c"]);
        assert!(store.erase(0));
        assert_eq!(names(&store), vec!["c"]);
    }

    #[test]
    fn test_erase_out_of_range() {
        let mut store = AdditiveLayerStore::new();
        store.add(layer(0, "a", Rgb::new(1, 2, 3))).unwrap();
        assert!(!store.erase(1));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_color(Rgb::BLACK, 0, 0, 0), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_special_rotates_left() {
        let mut store = AdditiveLayerStore::new();
        for (i, name) in ["a", "b", "c"].iter().enumerate() {
            store.add(layer(i, name, Rgb::BLACK)).unwrap();
        }

        store.special();
        assert_eq!(names(&store), vec!["b", "c", "a"]);
        store.special();
        store.special();
        assert_eq!(names(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_special_small_stores() {
        let mut store = AdditiveLayerStore::new();
        store.special();
        assert!(store.is_empty());

        store.add(layer(0, "a", Rgb::BLACK)).unwrap();
        store.special();
        assert_eq!(names(&store), vec!["a"]);
    }

    #[test]
    fn test_default_capacity() {
        let store = AdditiveLayerStore::default();
        assert_eq!(store.capacity(), ADDITIVE_CAPACITY);
        assert!(store.ensure_room().is_ok());
    }

    #[test]
    fn test_capacity_overflow() {
        let mut store = AdditiveLayerStore::with_capacity(2);
        store.add(layer(0, "a", Rgb::BLACK)).unwrap();
        store.add(layer(1, "b", Rgb::BLACK)).unwrap();

        let err = store.add(layer(2, "c", Rgb::BLACK)).unwrap_err();
        assert!(matches!(err, LayerError::CapacityExceeded { capacity: 2, .. }));
        assert!(store.ensure_room().is_err());
        assert_eq!(store.len(), store.capacity());
        assert_eq!(names(&store), vec!["a", "b"]);
    }
}
