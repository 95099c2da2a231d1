//! Error types for garden operations.
//!
//! Every variant is recoverable. Evaluating a plant that is not on the grid
//! is not an error at all; it yields an `Error`-status evaluation instead.

use thiserror::Error;

/// Result type for garden operations.
pub type Result<T> = std::result::Result<T, GardenError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GardenError {
    #[error("position ({row}, {col}) is outside the {rows}x{cols} grid")]
    InvalidPosition {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("unknown plant: {0}")]
    UnknownPlant(String),

    #[error(
        "layout is {found_rows} rows (row widths {found_cols:?}) but the grid is {expected_rows}x{expected_cols}"
    )]
    LayoutMismatch {
        expected_rows: usize,
        expected_cols: usize,
        found_rows: usize,
        found_cols: Vec<usize>,
    },

    #[error("plant '{0}' is already in the catalog")]
    DuplicatePlant(String),

    #[error("catalog is full ({0} plants)")]
    CatalogFull(usize),

    #[error("tag registry is full ({0} tags)")]
    TagRegistryFull(usize),

    #[error("invalid tag uid: {0}")]
    InvalidTag(String),

    #[error("no plant registered for tag {0}")]
    UnknownTag(String),
}
