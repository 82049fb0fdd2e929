//! Layer Stores
//!
//! Each grid cell owns one [`LayerStore`]. The three variants share the
//! add / erase / get_color / special contract but differ in ordering:
//! - `Set`: a single active layer
//! - `Additive`: layers in add order, colors summed
//! - `Sequence`: a set of layers applied in index order
//!
//! Set and sequence stores erase by layer; the additive store erases by
//! position in add order. [`EraseTarget`] makes the caller say which one it
//! means, and a mismatch is reported rather than guessed.

mod additive;
mod sequence;
mod set;

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{LayerError, Result};
use crate::layers::LayerRef;

pub use additive::{AdditiveLayerStore, ADDITIVE_CAPACITY};
pub use sequence::{
    median_by_name, resolve_visible, SequenceLayerStore, Visible, SEQUENCE_CAPACITY,
};
pub use set::SetLayerStore;

// ============================================================================
// Draw style
// ============================================================================

/// Which store every cell of a grid uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DrawStyle {
    Set,
    Additive,
    Sequence,
}

impl DrawStyle {
    /// Canonical name, as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawStyle::Set => "SET",
            DrawStyle::Additive => "ADD",
            DrawStyle::Sequence => "SEQUENCE",
        }
    }
}

impl FromStr for DrawStyle {
    type Err = LayerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SET" => Ok(DrawStyle::Set),
            "ADD" | "ADDITIVE" => Ok(DrawStyle::Additive),
            "SEQUENCE" | "SEQUENTIAL" => Ok(DrawStyle::Sequence),
            _ => Err(LayerError::UnknownDrawStyle {
                style: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for DrawStyle {
    type Error = LayerError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<DrawStyle> for String {
    fn from(style: DrawStyle) -> Self {
        style.as_str().to_string()
    }
}

impl fmt::Display for DrawStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Erase target
// ============================================================================

/// What an erase action points at
#[derive(Debug, Clone)]
pub enum EraseTarget {
    /// A layer, for set and sequence stores
    Layer(LayerRef),
    /// A position in add order, for additive stores
    Position(usize),
}

impl EraseTarget {
    fn kind(&self) -> &'static str {
        match self {
            EraseTarget::Layer(_) => "layer",
            EraseTarget::Position(_) => "position",
        }
    }
}

// ============================================================================
// Layer store
// ============================================================================

/// Per-cell layer container
#[derive(Debug, Clone)]
pub enum LayerStore {
    Set(SetLayerStore),
    Additive(AdditiveLayerStore),
    Sequence(SequenceLayerStore),
}

impl LayerStore {
    /// Create an empty store of the given style
    pub fn new(style: DrawStyle) -> Self {
        match style {
            DrawStyle::Set => LayerStore::Set(SetLayerStore::new()),
            DrawStyle::Additive => LayerStore::Additive(AdditiveLayerStore::new()),
            DrawStyle::Sequence => LayerStore::Sequence(SequenceLayerStore::new()),
        }
    }

    pub fn style(&self) -> DrawStyle {
        match self {
            LayerStore::Set(_) => DrawStyle::Set,
            LayerStore::Additive(_) => DrawStyle::Additive,
            LayerStore::Sequence(_) => DrawStyle::Sequence,
        }
    }

    /// Add a layer
    ///
    /// # Returns
    /// Whether the store changed.
    ///
    /// # Errors
    /// `CapacityExceeded` when an additive or sequence store is full.
    pub fn add(&mut self, layer: LayerRef) -> Result<bool> {
        let name = layer.name().to_string();
        let changed = match self {
            LayerStore::Set(store) => store.add(layer),
            LayerStore::Additive(store) => store.add(layer)?,
            LayerStore::Sequence(store) => store.add(layer)?,
        };
        if changed {
            debug!("{} store: added {}", self.style(), name);
        }
        Ok(changed)
    }

    /// Erase a layer or a position, depending on the store
    ///
    /// # Returns
    /// Whether the store changed; erasing something absent is `Ok(false)`.
    ///
    /// # Errors
    /// `EraseTargetMismatch` when the target kind does not fit the store.
    pub fn erase(&mut self, target: &EraseTarget) -> Result<bool> {
        let changed = match (&mut *self, target) {
            (LayerStore::Set(store), EraseTarget::Layer(layer)) => store.erase(layer),
            (LayerStore::Sequence(store), EraseTarget::Layer(layer)) => store.erase(layer),
            (LayerStore::Additive(store), EraseTarget::Position(position)) => {
                store.erase(*position)
            }
            (store, target) => {
                return Err(LayerError::EraseTargetMismatch {
                    store: store.style().as_str(),
                    target: target.kind(),
                })
            }
        };
        Ok(changed)
    }

    /// Fail with `CapacityExceeded` if `add(layer)` would overflow
    pub fn ensure_room(&self, layer: &LayerRef) -> Result<()> {
        match self {
            LayerStore::Set(_) => Ok(()),
            LayerStore::Additive(store) => store.ensure_room(),
            LayerStore::Sequence(store) => store.ensure_room(layer),
        }
    }

    /// The color this cell shows
    pub fn get_color(&self, start: Rgb, timestamp: u64, x: i32, y: i32) -> Rgb {
        match self {
            LayerStore::Set(store) => store.get_color(start, timestamp, x, y),
            LayerStore::Additive(store) => store.get_color(start, timestamp, x, y),
            LayerStore::Sequence(store) => store.get_color(start, timestamp, x, y),
        }
    }

    /// Run the store-specific special action
    pub fn special(&mut self) {
        match self {
            LayerStore::Set(store) => store.special(),
            LayerStore::Additive(store) => store.special(),
            LayerStore::Sequence(store) => store.special(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            LayerStore::Set(store) => store.len(),
            LayerStore::Additive(store) => store.len(),
            LayerStore::Sequence(store) => store.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::LayerCatalog;

    const STYLES: [DrawStyle; 3] = [DrawStyle::Set, DrawStyle::Additive, DrawStyle::Sequence];

    #[test]
    fn test_parse_draw_style() {
        assert_eq!("SET".parse::<DrawStyle>().unwrap(), DrawStyle::Set);
        assert_eq!("add".parse::<DrawStyle>().unwrap(), DrawStyle::Additive);
        assert_eq!("Sequential".parse::<DrawStyle>().unwrap(), DrawStyle::Sequence);

        let err = "some".parse::<DrawStyle>().unwrap_err();
        assert!(matches!(err, LayerError::UnknownDrawStyle { ref style } if style == "some"));
    }

    #[test]
    fn test_draw_style_serde() {
        let json = serde_json::to_string(&DrawStyle::Additive).unwrap();
        assert_eq!(json, "\"ADD\"");
        let style: DrawStyle = serde_json::from_str("\"sequence\"").unwrap();
        assert_eq!(style, DrawStyle::Sequence);
        assert!(serde_json::from_str::<DrawStyle>("\"paint\"").is_err());
    }

    #[test]
    fn test_new_store_is_empty() {
        for style in STYLES {
            let mut store = LayerStore::new(style);
            assert_eq!(store.style(), style);
            store.special();
            assert!(store.is_empty());
            assert_eq!(store.get_color(Rgb::new(4, 5, 6), 0, 0, 0), Rgb::new(4, 5, 6));
        }
    }

    #[test]
    fn test_erase_absent_is_noop() {
        let catalog = LayerCatalog::standard();
        let red = catalog.by_name("red").unwrap().clone();
        let blue = catalog.by_name("blue").unwrap().clone();

        for style in STYLES {
            let mut store = LayerStore::new(style);
            store.add(red.clone()).unwrap();
            let before = store.get_color(Rgb::BLACK, 0, 0, 0);

            let target = match style {
                DrawStyle::Additive => EraseTarget::Position(3),
                _ => EraseTarget::Layer(blue.clone()),
            };
            assert!(!store.erase(&target).unwrap());
            assert_eq!(store.len(), 1);
            assert_eq!(store.get_color(Rgb::BLACK, 0, 0, 0), before);
        }
    }

    #[test]
    fn test_ensure_room() {
        let red = LayerCatalog::standard().by_name("red").unwrap().clone();
        for style in STYLES {
            let store = LayerStore::new(style);
            assert!(store.ensure_room(&red).is_ok());
        }

        let mut additive = LayerStore::new(DrawStyle::Additive);
        for _ in 0..ADDITIVE_CAPACITY {
            additive.add(red.clone()).unwrap();
        }
        assert!(matches!(
            additive.ensure_room(&red),
            Err(LayerError::CapacityExceeded { store: "additive", .. })
        ));
    }

    #[test]
    fn test_erase_target_mismatch() {
        let red = LayerCatalog::standard().by_name("red").unwrap().clone();

        let mut additive = LayerStore::new(DrawStyle::Additive);
        let err = additive.erase(&EraseTarget::Layer(red)).unwrap_err();
        assert_eq!(err.error_code(), "ERASE_TARGET_MISMATCH");

        let mut set = LayerStore::new(DrawStyle::Set);
        assert!(set.erase(&EraseTarget::Position(0)).is_err());
    }

    #[test]
    fn test_dispatch_add_and_erase() {
        let red = LayerCatalog::standard().by_name("red").unwrap().clone();

        let mut sequence = LayerStore::new(DrawStyle::Sequence);
        assert!(sequence.add(red.clone()).unwrap());
        assert!(!sequence.add(red.clone()).unwrap());
        assert!(sequence.erase(&EraseTarget::Layer(red.clone())).unwrap());

        let mut additive = LayerStore::new(DrawStyle::Additive);
        additive.add(red.clone()).unwrap();
        additive.add(red).unwrap();
        assert_eq!(additive.get_color(Rgb::BLACK, 0, 0, 0), Rgb::new(510, 0, 0));
        assert!(additive.erase(&EraseTarget::Position(0)).unwrap());
        assert_eq!(additive.len(), 1);
    }
}
