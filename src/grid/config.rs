//! Grid configuration
//!
//! The draw style has to be settled before any cell exists, so an unknown
//! style is rejected while the config is parsed.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LayerError, Result};
use crate::store::DrawStyle;

use super::{DEFAULT_BRUSH_SIZE, MAX_BRUSH, MIN_BRUSH};

/// Default grid height and width
pub const DEFAULT_GRID_SIZE: usize = 16;

/// Settings needed to build a [`Grid`](super::Grid)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Store used by every cell
    pub draw_style: DrawStyle,
    pub rows: usize,
    pub cols: usize,
    /// Initial brush size
    pub brush_size: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            draw_style: DrawStyle::Set,
            rows: DEFAULT_GRID_SIZE,
            cols: DEFAULT_GRID_SIZE,
            brush_size: DEFAULT_BRUSH_SIZE,
        }
    }
}

impl GridConfig {
    /// Config with the given style and size, default brush
    pub fn new(draw_style: DrawStyle, rows: usize, cols: usize) -> Self {
        Self {
            draw_style,
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Read a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GridConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check dimensions and brush bounds
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LayerError::InvalidGridSize {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(MIN_BRUSH..=MAX_BRUSH).contains(&self.brush_size) {
            return Err(LayerError::InvalidBrushSize {
                size: self.brush_size,
                min: MIN_BRUSH,
                max: MAX_BRUSH,
            });
        }
        Ok(())
    }
}
