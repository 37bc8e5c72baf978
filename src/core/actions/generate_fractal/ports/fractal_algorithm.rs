use crate::core::data::cell::Cell;
use crate::core::data::dimensions::Dimensions;

/// Per-pixel computation over a fixed pixel grid.
pub trait FractalAlgorithm {
    type Output;

    fn pixels(&self) -> Dimensions;

    fn compute(&self, pixel: Cell) -> Self::Output;
}
