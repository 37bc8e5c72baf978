use crate::core::data::cell::Cell;
use crate::core::planners::wavefront::distance_field::DistanceField;

/// Cells from start to goal, each one hop closer to the goal than the last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    #[must_use]
    pub fn goal(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Number of moves, one less than the number of cells.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.cells.len() - 1
    }
}

/// Greedy descent over `distances` from `start` towards `goal`.
///
/// At every cell the first neighbour, in up/down/left/right order, with a
/// strictly smaller distance is taken. Returns `None` when `start` is
/// unreached or the descent bottoms out somewhere other than `goal`.
#[must_use]
pub fn reconstruct_path(distances: &DistanceField, start: Cell, goal: Cell) -> Option<Path> {
    let dims = distances.dims();
    let mut current = start;
    let mut remaining = distances.get(start)?;
    let mut cells = Vec::with_capacity(remaining as usize + 1);

    cells.push(current);

    while current != goal {
        let (next, next_distance) = current
            .neighbours(dims)
            .filter_map(|cell| distances.get(cell).map(|d| (cell, d)))
            .find(|&(_, d)| d < remaining)?;

        current = next;
        remaining = next_distance;
        cells.push(current);
    }

    Some(Path { cells })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::dimensions::Dimensions;
    use crate::core::planners::wavefront::obstacle_field::ObstacleField;

    fn propagated(width: usize, height: usize, goal: Cell) -> DistanceField {
        let dims = Dimensions::at_least(width, height, 3).unwrap();
        let obstacles = ObstacleField::standard(dims);
        let mut field = DistanceField::unset(dims);

        field.propagate_from(goal, &obstacles, |_| {});
        field
    }

    #[test]
    fn test_path_length_equals_start_distance() {
        let goal = Cell::new(8, 8);
        let field = propagated(10, 10, goal);

        let path = reconstruct_path(&field, Cell::new(1, 1), goal).unwrap();

        assert_eq!(path.start(), Cell::new(1, 1));
        assert_eq!(path.goal(), goal);
        assert_eq!(path.steps(), field.get(Cell::new(1, 1)).unwrap() as usize);
    }

    #[test]
    fn test_each_step_descends_by_one() {
        let goal = Cell::new(13, 9);
        let field = propagated(15, 11, goal);

        let path = reconstruct_path(&field, Cell::new(1, 1), goal).unwrap();

        for pair in path.cells().windows(2) {
            let here = field.get(pair[0]).unwrap();
            let next = field.get(pair[1]).unwrap();
            assert_eq!(here, next + 1);
        }
    }

    #[test]
    fn test_prefers_up_before_left() {
        // From (3,3) towards (1,1) both up and left descend; up is scanned first.
        let goal = Cell::new(1, 1);
        let field = propagated(6, 6, goal);

        let path = reconstruct_path(&field, Cell::new(3, 3), goal).unwrap();

        assert_eq!(path.cells()[1], Cell::new(3, 2));
    }

    #[test]
    fn test_start_equal_to_goal() {
        let goal = Cell::new(4, 4);
        let field = propagated(8, 8, goal);

        let path = reconstruct_path(&field, goal, goal).unwrap();

        assert_eq!(path.cells(), &[goal]);
        assert_eq!(path.steps(), 0);
    }

    #[test]
    fn test_unreached_start_has_no_path() {
        let goal = Cell::new(1, 1);
        let field = propagated(10, 10, goal);

        assert_eq!(reconstruct_path(&field, Cell::new(2, 2), goal), None);
    }

    #[test]
    fn test_wrong_goal_has_no_path() {
        let field = propagated(10, 10, Cell::new(1, 1));

        assert_eq!(reconstruct_path(&field, Cell::new(5, 5), Cell::new(8, 8)), None);
    }
}
