use crate::core::data::cell::Cell;
use crate::core::data::dimensions::Dimensions;

/// Dense row-major field with one value per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    dims: Dimensions,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    #[must_use]
    pub fn filled(dims: Dimensions, value: T) -> Self {
        Self {
            dims,
            cells: vec![value; dims.area()],
        }
    }

    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    #[must_use]
    pub fn from_fn(dims: Dimensions, mut f: impl FnMut(Cell) -> T) -> Self {
        Self {
            dims,
            cells: dims.cells().map(&mut f).collect(),
        }
    }

    #[must_use]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.dims.index_of(cell).map(|index| &self.cells[index])
    }

    #[must_use]
    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut T> {
        self.dims.index_of(cell).map(|index| &mut self.cells[index])
    }

    /// Rows in top-to-bottom order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.dims.width())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, &T)> {
        self.dims.cells().zip(self.cells.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims() -> Dimensions {
        Dimensions::at_least(3, 2, 1).unwrap()
    }

    #[test]
    fn test_filled_and_get() {
        let grid = Grid::filled(dims(), 7u8);

        assert_eq!(grid.get(Cell::new(2, 1)), Some(&7));
        assert_eq!(grid.get(Cell::new(3, 1)), None);
    }

    #[test]
    fn test_get_mut_and_fill() {
        let mut grid = Grid::filled(dims(), 0u8);

        *grid.get_mut(Cell::new(1, 1)).unwrap() = 5;
        assert_eq!(grid.get(Cell::new(1, 1)), Some(&5));

        grid.fill(1);
        assert!(grid.iter().all(|(_, value)| *value == 1));
    }

    #[test]
    fn test_from_fn_receives_cell() {
        let grid = Grid::from_fn(dims(), |cell| cell.x + 10 * cell.y);

        assert_eq!(grid.get(Cell::new(2, 0)), Some(&2));
        assert_eq!(grid.get(Cell::new(1, 1)), Some(&11));
    }

    #[test]
    fn test_rows_split_by_width() {
        let grid = Grid::from_fn(dims(), |cell| cell.y);
        let rows: Vec<&[usize]> = grid.rows().collect();

        assert_eq!(rows, vec![&[0, 0, 0][..], &[1, 1, 1][..]]);
    }
}
