use thiserror::Error;

use crate::core::data::cell::Cell;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum DimensionsError {
    #[error("dimensions {width}x{height} are below the minimum of {minimum} per axis")]
    TooSmall {
        width: usize,
        height: usize,
        minimum: usize,
    },
}

/// Width and height of a dense row-major field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    /// Builds dimensions whose width and height are both at least `minimum`
    /// (and never zero).
    pub fn at_least(width: usize, height: usize, minimum: usize) -> Result<Self, DimensionsError> {
        let minimum = minimum.max(1);

        if width < minimum || height < minimum {
            return Err(DimensionsError::TooSmall {
                width,
                height,
                minimum,
            });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    #[must_use]
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.y * self.width + cell.x)
    }

    #[must_use]
    pub fn is_border(&self, cell: Cell) -> bool {
        cell.x == 0 || cell.y == 0 || cell.x == self.width - 1 || cell.y == self.height - 1
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Cell { x, y }))
    }
}
