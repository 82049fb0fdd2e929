//! Error handling for layerpaint
//!
//! Erasing something that is not there is not an error: every store reports
//! it as a `false` "nothing changed" result. The variants below cover
//! configuration mistakes and capacity limits only.

use thiserror::Error;

/// Result type alias for layerpaint operations
pub type Result<T> = std::result::Result<T, LayerError>;

/// Main error type for layerpaint operations
#[derive(Error, Debug)]
pub enum LayerError {
    // Configuration Errors
    #[error("Unknown draw style: {style} (expected SET, ADD or SEQUENCE)")]
    UnknownDrawStyle { style: String },

    #[error("Invalid grid size: {rows}x{cols}")]
    InvalidGridSize { rows: usize, cols: usize },

    #[error("Brush size {size} outside {min}..={max}")]
    InvalidBrushSize { size: usize, min: usize, max: usize },

    // Store Errors
    #[error("{store} store is full ({capacity} layers)")]
    CapacityExceeded {
        store: &'static str,
        capacity: usize,
    },

    #[error("{store} store cannot erase by {target}")]
    EraseTargetMismatch {
        store: &'static str,
        target: &'static str,
    },

    // Lookup Errors
    #[error("Cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Unknown layer: {name}")]
    UnknownLayer { name: String },

    // Scenario Errors
    #[error("Invalid scenario: {reason}")]
    ScenarioError { reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LayerError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            LayerError::UnknownDrawStyle { .. } => "UNKNOWN_DRAW_STYLE",
            LayerError::InvalidGridSize { .. } => "INVALID_GRID_SIZE",
            LayerError::InvalidBrushSize { .. } => "INVALID_BRUSH_SIZE",
            LayerError::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            LayerError::EraseTargetMismatch { .. } => "ERASE_TARGET_MISMATCH",
            LayerError::CellOutOfBounds { .. } => "CELL_OUT_OF_BOUNDS",
            LayerError::UnknownLayer { .. } => "UNKNOWN_LAYER",
            LayerError::ScenarioError { .. } => "SCENARIO_ERROR",
            LayerError::Io(_) => "IO_ERROR",
            LayerError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if the grid is still usable after this error
    ///
    /// Configuration errors happen before any cell exists, so there is
    /// nothing to recover.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LayerError::CapacityExceeded { .. }
                | LayerError::EraseTargetMismatch { .. }
                | LayerError::CellOutOfBounds { .. }
                | LayerError::UnknownLayer { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = LayerError::UnknownDrawStyle {
            style: "some".to_string(),
        };
        assert_eq!(err.error_code(), "UNKNOWN_DRAW_STYLE");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_capacity_is_recoverable() {
        let err = LayerError::CapacityExceeded {
            store: "additive",
            capacity: 100,
        };
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "additive store is full (100 layers)");
    }
}
