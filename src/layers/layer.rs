//! Layer definition

use std::fmt;
use std::sync::Arc;

use crate::color::Rgb;

/// Color transform: `(base, timestamp, x, y) -> color`
pub type ApplyFn = Arc<dyn Fn(Rgb, u64, i32, i32) -> Rgb + Send + Sync>;

/// Shared handle to a catalog layer. Stores reference layers, never own them.
pub type LayerRef = Arc<Layer>;

/// Thresholds a sequence store checks before rendering a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Activation {
    /// Minimum brightness of the start color
    pub start: i32,
    /// Minimum timestamp
    pub timestamp: u64,
}

impl Activation {
    /// Whether a render at `start` / `timestamp` satisfies both thresholds
    pub fn is_active(&self, start: Rgb, timestamp: u64) -> bool {
        self.start <= start.brightness() && self.timestamp <= timestamp
    }
}

/// A named, indexed color transformation
///
/// Immutable once built. Two layers are "the same" only when they are the
/// same instance (see [`Layer::same`]); equal names or indices do not count.
#[derive(Clone)]
pub struct Layer {
    index: usize,
    name: String,
    apply: ApplyFn,
    color: Rgb,
    activation: Activation,
}

impl Layer {
    /// Create a layer with an arbitrary transform
    ///
    /// # Arguments
    /// * `index` - Stable catalog index, used for ordering and slot lookups
    /// * `name` - Display name, used for median selection
    /// * `color` - Flat contribution used by additive blending
    /// * `apply` - The color transform
    pub fn new<F>(index: usize, name: impl Into<String>, color: Rgb, apply: F) -> Self
    where
        F: Fn(Rgb, u64, i32, i32) -> Rgb + Send + Sync + 'static,
    {
        Self {
            index,
            name: name.into(),
            apply: Arc::new(apply),
            color,
            activation: Activation::default(),
        }
    }

    /// Create a layer that always renders `color`
    pub fn flat(index: usize, name: impl Into<String>, color: Rgb) -> Self {
        Self::new(index, name, color, move |_, _, _, _| color)
    }

    /// Require an activation threshold for sequence rendering
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    /// Wrap the layer in a shared handle
    pub fn into_ref(self) -> LayerRef {
        Arc::new(self)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Render this layer over `base`
    pub fn apply(&self, base: Rgb, timestamp: u64, x: i32, y: i32) -> Rgb {
        (self.apply)(base, timestamp, x, y)
    }

    /// Whether this layer takes part in a sequence render at `start` / `timestamp`
    pub fn is_active(&self, start: Rgb, timestamp: u64) -> bool {
        self.activation.is_active(start, timestamp)
    }

    /// Identity comparison of two handles
    pub fn same(a: &LayerRef, b: &LayerRef) -> bool {
        Arc::ptr_eq(a, b)
    }
}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("color", &self.color)
            .field("activation", &self.activation)
            .finish()
    }
}
