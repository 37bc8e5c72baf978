use thiserror::Error;

use crate::core::data::cell::Cell;
use crate::core::data::dimensions::DimensionsError;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum WavefrontError {
    #[error("invalid grid size: {0}")]
    Grid(#[from] DimensionsError),
    #[error("{role} cell {cell} lies outside the {width}x{height} grid")]
    OutOfBounds {
        role: &'static str,
        cell: Cell,
        width: usize,
        height: usize,
    },
}
