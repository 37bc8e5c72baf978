use std::fmt;

use crate::core::data::dimensions::Dimensions;

/// Axis-aligned grid step. Rows grow downwards, so `Up` decreases `y`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbour scan order shared by propagation and path reconstruction.
    pub const SCAN_ORDER: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The adjacent cell in `direction`, or `None` when it would leave `dims`.
    #[must_use]
    pub fn step(self, direction: Direction, dims: Dimensions) -> Option<Self> {
        let next = match direction {
            Direction::Up => Self::new(self.x, self.y.checked_sub(1)?),
            Direction::Down => Self::new(self.x, self.y + 1),
            Direction::Left => Self::new(self.x.checked_sub(1)?, self.y),
            Direction::Right => Self::new(self.x + 1, self.y),
        };

        dims.contains(next).then_some(next)
    }

    /// In-bounds 4-neighbours in [`Direction::SCAN_ORDER`].
    pub fn neighbours(self, dims: Dimensions) -> impl Iterator<Item = Self> {
        Direction::SCAN_ORDER
            .into_iter()
            .filter_map(move |direction| self.step(direction, dims))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
