//! Set Layer Store
//!
//! Holds at most one layer. Adding replaces, erasing is keyed by catalog
//! index, and `special` inverts the rendered output of the held layer.

use log::debug;

use crate::color::Rgb;
use crate::layers::{Layer, LayerRef};

/// The single occupied slot
#[derive(Debug, Clone)]
struct Slot {
    layer: LayerRef,
    inverted: bool,
}

/// Single-slot layer store
#[derive(Debug, Clone, Default)]
pub struct SetLayerStore {
    current: Option<Slot>,
}

impl SetLayerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Make `layer` the active layer
    ///
    /// Re-adding the active layer keeps its inversion; any other layer
    /// starts uninverted.
    ///
    /// # Returns
    /// Always `true`: replacing a layer (even with itself) counts as a change.
    pub fn add(&mut self, layer: LayerRef) -> bool {
        debug!("set store: {} replaces {:?}", layer.name(), self.current().map(|l| l.name()));
        let inverted = self
            .current
            .as_ref()
            .is_some_and(|slot| slot.inverted && Layer::same(&slot.layer, &layer));
        self.current = Some(Slot { layer, inverted });
        true
    }

    /// Clear the active layer if it occupies the slot of `layer.index()`
    ///
    /// Identity is not checked: any layer with the same index erases it.
    pub fn erase(&mut self, layer: &LayerRef) -> bool {
        match &self.current {
            Some(slot) if slot.layer.index() == layer.index() => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Render the active layer over `start`, or return `start` when empty
    pub fn get_color(&self, start: Rgb, timestamp: u64, x: i32, y: i32) -> Rgb {
        match &self.current {
            Some(slot) => {
                let color = slot.layer.apply(start, timestamp, x, y);
                if slot.inverted {
                    color.inverted()
                } else {
                    color
                }
            }
            None => start,
        }
    }

    /// Invert the output of the held layer; a second call undoes it
    pub fn special(&mut self) {
        if let Some(slot) = &mut self.current {
            slot.inverted = !slot.inverted;
        }
    }

    /// The active layer, if any
    pub fn current(&self) -> Option<&LayerRef> {
        self.current.as_ref().map(|slot| &slot.layer)
    }

    /// Whether the active layer's output is currently inverted
    pub fn is_inverted(&self) -> bool {
        self.current.as_ref().is_some_and(|slot| slot.inverted)
    }

    pub fn len(&self) -> usize {
        usize::from(self.current.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::LayerCatalog;

    fn catalog() -> &'static LayerCatalog {
        LayerCatalog::standard()
    }

    #[test]
    fn test_empty_returns_start() {
        let store = SetLayerStore::new();
        let start = Rgb::new(10, 20, 30);
        assert_eq!(store.get_color(start, 0, 0, 0), start);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_replaces() {
        let catalog = catalog();
        let red = catalog.by_name("red").unwrap().clone();
        let blue = catalog.by_name("blue").unwrap().clone();

        let mut store = SetLayerStore::new();
        assert!(store.add(red));
        assert!(store.add(blue.clone()));

        assert!(Layer::same(store.current().unwrap(), &blue));
        assert_eq!(store.get_color(Rgb::WHITE, 0, 0, 0), Rgb::new(0, 0, 255));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_erase_is_index_keyed() {
        let red = catalog().by_name("red").unwrap().clone();
        let same_index = Layer::flat(red.index(), "impostor", Rgb::BLACK).into_ref();

        let mut store = SetLayerStore::new();
        store.add(red);
        assert!(store.erase(&same_index));
        assert!(store.is_empty());
        assert!(!store.erase(&same_index));
    }

    #[test]
    fn test_erase_replaced_layer_is_noop() {
        let catalog = catalog();
        let red = catalog.by_name("red").unwrap().clone();
        let green = catalog.by_name("green").unwrap().clone();

        let mut store = SetLayerStore::new();
        store.add(red.clone());
        store.add(green);

        assert!(!store.erase(&red));
        assert_eq!(store.get_color(Rgb::BLACK, 0, 0, 0), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_special_is_self_inverse() {
        let lighten = catalog().by_name("lighten").unwrap().clone();
        let start = Rgb::new(100, 0, 250);

        let mut store = SetLayerStore::new();
        store.add(lighten);
        let before = store.get_color(start, 0, 0, 0);

        store.special();
        assert!(store.is_inverted());
        assert_eq!(store.get_color(start, 0, 0, 0), before.inverted());

        store.special();
        assert!(!store.is_inverted());
        assert_eq!(store.get_color(start, 0, 0, 0), before);
    }

    #[test]
    fn test_special_on_empty_is_noop() {
        let mut store = SetLayerStore::new();
        store.special();
        assert!(store.is_empty());
        assert!(!store.is_inverted());
    }

    #[test]
    fn test_readding_same_layer_keeps_inversion() {
        let red = catalog().by_name("red").unwrap().clone();
        let mut store = SetLayerStore::new();
        store.add(red);
        store.special();

        assert!(store.add(catalog().by_name("red").unwrap().clone()));
        assert!(store.is_inverted());
        assert_eq!(store.get_color(Rgb::BLACK, 0, 0, 0), Rgb::new(0, 255, 255));
    }

    #[test]
    fn test_add_clears_inversion() {
        let catalog = catalog();
        let mut store = SetLayerStore::new();
        store.add(catalog.by_name("red").unwrap().clone());
        store.special();
        store.add(catalog.by_name("green").unwrap().clone());
        assert_eq!(store.get_color(Rgb::BLACK, 0, 0, 0), Rgb::new(0, 255, 0));
    }
}
