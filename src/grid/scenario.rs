//! Scripted grid sessions
//!
//! A scenario is a grid config plus a list of actions, replayed in order
//! against a fresh grid. Layers are referenced by catalog name.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{LayerError, Result};
use crate::layers::LayerCatalog;
use crate::store::EraseTarget;

use super::{Grid, GridConfig};

/// One scripted action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Add a layer under the brush
    Paint { row: usize, col: usize, layer: String },
    /// Erase a layer under the brush (set and sequence grids)
    Erase { row: usize, col: usize, layer: String },
    /// Erase an add-order position under the brush (additive grids)
    ErasePosition { row: usize, col: usize, position: usize },
    /// Special on every cell
    Special,
    IncreaseBrush,
    DecreaseBrush,
}

/// Grid config, render settings and actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default)]
    pub background: Rgb,
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl Scenario {
    /// Read a JSON scenario file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Replay every action on a new grid
    ///
    /// # Errors
    /// The first failing action, wrapped with its position in the list.
    pub fn run(&self, catalog: &LayerCatalog) -> Result<Grid> {
        let mut grid = Grid::from_config(&self.grid)?;
        for (step, action) in self.actions.iter().enumerate() {
            apply(&mut grid, catalog, action).map_err(|e| LayerError::ScenarioError {
                reason: format!("action {} ({:?}): {}", step, action, e),
            })?;
        }
        Ok(grid)
    }
}

fn apply(grid: &mut Grid, catalog: &LayerCatalog, action: &Action) -> Result<()> {
    match action {
        Action::Paint { row, col, layer } => {
            grid.paint(*row, *col, catalog.by_name(layer)?)?;
        }
        Action::Erase { row, col, layer } => {
            let target = EraseTarget::Layer(catalog.by_name(layer)?.clone());
            grid.erase(*row, *col, &target)?;
        }
        Action::ErasePosition { row, col, position } => {
            grid.erase(*row, *col, &EraseTarget::Position(*position))?;
        }
        Action::Special => grid.special(),
        Action::IncreaseBrush => grid.increase_brush_size(),
        Action::DecreaseBrush => grid.decrease_brush_size(),
    }
    Ok(())
}
