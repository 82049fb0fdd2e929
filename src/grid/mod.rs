//! Grid
//!
//! A rows x cols array of cells, each owning one [`LayerStore`] of the
//! grid's draw style. Painting and erasing touch every cell within the
//! brush's Manhattan radius of the target cell.

mod config;
mod scenario;

use log::{debug, info};

use crate::color::Rgb;
use crate::error::{LayerError, Result};
use crate::layers::LayerRef;
use crate::store::{DrawStyle, EraseTarget, LayerStore};

pub use config::{GridConfig, DEFAULT_GRID_SIZE};
pub use scenario::{Action, Scenario};

/// Brush size of a new grid
pub const DEFAULT_BRUSH_SIZE: usize = 1;
/// Largest brush radius
pub const MAX_BRUSH: usize = 5;
/// Smallest brush radius (a single cell)
pub const MIN_BRUSH: usize = 0;

/// Grid of layer stores
#[derive(Debug, Clone)]
pub struct Grid {
    draw_style: DrawStyle,
    rows: usize,
    cols: usize,
    brush_size: usize,
    /// Row-major
    cells: Vec<LayerStore>,
}

impl Grid {
    /// Create a grid of empty stores
    ///
    /// # Errors
    /// `InvalidGridSize` when either dimension is zero.
    pub fn new(draw_style: DrawStyle, rows: usize, cols: usize) -> Result<Self> {
        Self::from_config(&GridConfig::new(draw_style, rows, cols))
    }

    /// Create a grid from a validated config
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        info!(
            "Creating {}x{} grid with {} stores",
            config.rows, config.cols, config.draw_style
        );

        let cells = (0..config.rows * config.cols)
            .map(|_| LayerStore::new(config.draw_style))
            .collect();

        Ok(Self {
            draw_style: config.draw_style,
            rows: config.rows,
            cols: config.cols,
            brush_size: config.brush_size,
            cells,
        })
    }

    pub fn draw_style(&self) -> DrawStyle {
        self.draw_style
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    // ------------------------------------------------------------------
    // Brush
    // ------------------------------------------------------------------

    pub fn brush_size(&self) -> usize {
        self.brush_size
    }

    /// Grow the brush by one, stopping at [`MAX_BRUSH`]
    pub fn increase_brush_size(&mut self) {
        if self.brush_size < MAX_BRUSH {
            self.brush_size += 1;
        }
    }

    /// Shrink the brush by one, stopping at [`MIN_BRUSH`]
    pub fn decrease_brush_size(&mut self) {
        if self.brush_size > MIN_BRUSH {
            self.brush_size -= 1;
        }
    }

    /// Cells within the brush radius of `(row, col)`, clipped to the grid
    fn brush_cells(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        let r = self.brush_size;
        let mut cells = Vec::new();
        for i in row.saturating_sub(r)..=(row + r).min(self.rows - 1) {
            let reach = r - i.abs_diff(row);
            for j in col.saturating_sub(reach)..=(col + reach).min(self.cols - 1) {
                cells.push((i, j));
            }
        }
        cells
    }

    // ------------------------------------------------------------------
    // Cells
    // ------------------------------------------------------------------

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(LayerError::CellOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// The store of one cell
    pub fn cell(&self, row: usize, col: usize) -> Result<&LayerStore> {
        let offset = self.offset(row, col)?;
        Ok(&self.cells[offset])
    }

    /// The store of one cell, mutably
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut LayerStore> {
        let offset = self.offset(row, col)?;
        Ok(&mut self.cells[offset])
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Add `layer` to every cell under the brush
    ///
    /// # Returns
    /// The number of cells that changed.
    ///
    /// # Errors
    /// `CellOutOfBounds` for a bad target, or `CapacityExceeded` if any cell
    /// under the brush is full. Room is checked in every cell first, so on
    /// error no cell has been changed.
    pub fn paint(&mut self, row: usize, col: usize, layer: &LayerRef) -> Result<usize> {
        self.offset(row, col)?;
        let cells = self.brush_cells(row, col);
        for &(i, j) in &cells {
            self.cell(i, j)?.ensure_room(layer)?;
        }

        let mut changed = 0;
        for (i, j) in cells {
            if self.cell_mut(i, j)?.add(layer.clone())? {
                changed += 1;
            }
        }
        debug!("paint {} at ({}, {}): {} cells changed", layer.name(), row, col, changed);
        Ok(changed)
    }

    /// Erase `target` from every cell under the brush
    ///
    /// # Returns
    /// The number of cells that changed.
    pub fn erase(&mut self, row: usize, col: usize, target: &EraseTarget) -> Result<usize> {
        self.offset(row, col)?;
        let mut changed = 0;
        for (i, j) in self.brush_cells(row, col) {
            if self.cell_mut(i, j)?.erase(target)? {
                changed += 1;
            }
        }
        debug!("erase at ({}, {}): {} cells changed", row, col, changed);
        Ok(changed)
    }

    /// Run `special` on every cell
    pub fn special(&mut self) {
        debug!("special on all {} cells", self.cells.len());
        for cell in &mut self.cells {
            cell.special();
        }
    }

    /// The color shown at `(row, col)`
    pub fn color_at(&self, row: usize, col: usize, background: Rgb, timestamp: u64) -> Result<Rgb> {
        let cell = self.cell(row, col)?;
        Ok(cell.get_color(background, timestamp, row as i32, col as i32))
    }

    /// Every cell's color, row by row
    pub fn colors(&self, background: Rgb, timestamp: u64) -> Vec<Vec<Rgb>> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| {
                        self.cells[row * self.cols + col].get_color(
                            background,
                            timestamp,
                            row as i32,
                            col as i32,
                        )
                    })
                    .collect()
            })
            .collect()
    }
}
