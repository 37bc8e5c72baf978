use crate::core::data::cell::Cell;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::grid::Grid;

/// Period of the scattered interior obstacle pattern.
const PILLAR_PERIOD: usize = 4;
/// Offset within each period at which a pillar sits, on both axes.
const PILLAR_OFFSET: usize = 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Terrain {
    Free,
    Blocked,
}

/// Fixed walls of a planning grid: a solid border plus a pillar on every cell
/// where `row % 4 == 2 && col % 4 == 2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleField {
    terrain: Grid<Terrain>,
}

impl ObstacleField {
    #[must_use]
    pub fn standard(dims: Dimensions) -> Self {
        let terrain = Grid::from_fn(dims, |cell| {
            if dims.is_border(cell) || is_pillar(cell) {
                Terrain::Blocked
            } else {
                Terrain::Free
            }
        });

        Self { terrain }
    }

    #[must_use]
    pub fn dims(&self) -> Dimensions {
        self.terrain.dims()
    }

    /// Out-of-bounds cells count as blocked.
    #[must_use]
    pub fn is_free(&self, cell: Cell) -> bool {
        self.terrain.get(cell) == Some(&Terrain::Free)
    }

    #[must_use]
    pub fn terrain(&self, cell: Cell) -> Option<Terrain> {
        self.terrain.get(cell).copied()
    }

    #[must_use]
    pub fn free_cells(&self) -> usize {
        self.terrain
            .iter()
            .filter(|(_, terrain)| **terrain == Terrain::Free)
            .count()
    }
}

/// Whether `cell` carries an interior pillar, border aside.
#[must_use]
pub fn is_pillar(cell: Cell) -> bool {
    cell.y % PILLAR_PERIOD == PILLAR_OFFSET && cell.x % PILLAR_PERIOD == PILLAR_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(width: usize, height: usize) -> ObstacleField {
        ObstacleField::standard(Dimensions::at_least(width, height, 3).unwrap())
    }

    #[test]
    fn test_border_is_blocked() {
        let field = field(7, 5);

        for x in 0..7 {
            assert!(!field.is_free(Cell::new(x, 0)));
            assert!(!field.is_free(Cell::new(x, 4)));
        }
        for y in 0..5 {
            assert!(!field.is_free(Cell::new(0, y)));
            assert!(!field.is_free(Cell::new(6, y)));
        }
    }

    #[test]
    fn test_pillars_on_period_four() {
        let field = field(12, 12);

        assert_eq!(field.terrain(Cell::new(2, 2)), Some(Terrain::Blocked));
        assert_eq!(field.terrain(Cell::new(6, 2)), Some(Terrain::Blocked));
        assert_eq!(field.terrain(Cell::new(6, 10)), Some(Terrain::Blocked));
        assert_eq!(field.terrain(Cell::new(2, 3)), Some(Terrain::Free));
        assert_eq!(field.terrain(Cell::new(4, 4)), Some(Terrain::Free));
    }

    #[test]
    fn test_is_pillar_matches_field() {
        let field = field(12, 12);

        for cell in field.dims().cells() {
            if !field.dims().is_border(cell) {
                assert_eq!(is_pillar(cell), !field.is_free(cell), "{cell}");
            }
        }
    }

    #[test]
    fn test_minimal_grid_has_single_free_cell() {
        let field = field(3, 3);

        assert_eq!(field.free_cells(), 1);
        assert!(field.is_free(Cell::new(1, 1)));
    }

    #[test]
    fn test_ten_by_ten_free_count() {
        // 8x8 interior minus pillars at (2,2), (2,6), (6,2), (6,6)
        assert_eq!(field(10, 10).free_cells(), 60);
    }

    #[test]
    fn test_out_of_bounds_is_not_free() {
        let field = field(5, 5);

        assert!(!field.is_free(Cell::new(5, 1)));
        assert_eq!(field.terrain(Cell::new(1, 9)), None);
    }
}
