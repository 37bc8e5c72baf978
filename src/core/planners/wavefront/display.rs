use crate::core::data::cell::Cell;
use crate::core::data::grid::Grid;
use crate::core::planners::wavefront::distance_field::DistanceField;
use crate::core::planners::wavefront::obstacle_field::ObstacleField;
use crate::core::planners::wavefront::path::Path;
use crate::core::util::ansi;

const WALL: char = '█';
const UNSET: char = ' ';
const CURRENT_STEP: char = '*';
const VISITED_STEP: char = '#';

/// Single glyph for a distance: `0-9`, then `A-F` cycling.
#[must_use]
pub fn distance_glyph(distance: u32) -> char {
    let glyph = if distance < 10 {
        b'0' + (distance % 10) as u8
    } else {
        b'A' + ((distance - 10) % 6) as u8
    };

    char::from(glyph)
}

/// Full-screen frame of the wavefront as it currently stands.
#[must_use]
pub fn distance_frame(obstacles: &ObstacleField, distances: &DistanceField) -> String {
    let dims = distances.dims();
    let mut frame = String::with_capacity(ansi::CLEAR_SCREEN.len() + dims.area() * 3 + dims.height());

    frame.push_str(ansi::CLEAR_SCREEN);

    for (y, row) in distances.rows().enumerate() {
        for (x, distance) in row.iter().enumerate() {
            if !obstacles.is_free(Cell::new(x, y)) {
                frame.push(WALL);
            } else {
                frame.push(distance.map_or(UNSET, distance_glyph));
            }
        }
        frame.push('\n');
    }

    frame
}

/// Per-cell position along a path, used to colour path frames.
#[derive(Debug, Clone)]
pub struct PathOverlay<'a> {
    path: &'a Path,
    positions: Grid<Option<usize>>,
}

impl<'a> PathOverlay<'a> {
    #[must_use]
    pub fn new(path: &'a Path, distances: &DistanceField) -> Self {
        let mut positions = Grid::filled(distances.dims(), None);

        for (index, &cell) in path.cells().iter().enumerate() {
            if let Some(slot) = positions.get_mut(cell) {
                slot.get_or_insert(index);
            }
        }

        Self { path, positions }
    }

    #[must_use]
    pub fn steps(&self) -> usize {
        self.path.cells().len()
    }

    /// Frame for path step `step` (zero-based): the current cell is bright
    /// yellow, earlier path cells bright green, other distances dimmed, and a
    /// status line names the step.
    #[must_use]
    pub fn frame(&self, obstacles: &ObstacleField, distances: &DistanceField, step: usize) -> String {
        let dims = distances.dims();
        let mut frame = String::with_capacity(dims.area() * 8 + 64);

        frame.push_str(ansi::CLEAR_SCREEN);

        for (y, row) in distances.rows().enumerate() {
            for (x, distance) in row.iter().enumerate() {
                let cell = Cell::new(x, y);
                let position = self.positions.get(cell).copied().flatten();

                if !obstacles.is_free(cell) {
                    frame.push(WALL);
                } else if let Some(position) = position.filter(|&p| p <= step) {
                    let (colour, glyph) = if position == step {
                        (ansi::BOLD_YELLOW, CURRENT_STEP)
                    } else {
                        (ansi::BOLD_GREEN, VISITED_STEP)
                    };
                    frame.push_str(colour);
                    frame.push(glyph);
                    frame.push_str(ansi::RESET);
                } else if let Some(distance) = distance {
                    frame.push_str(ansi::DIM);
                    frame.push(distance_glyph(*distance));
                    frame.push_str(ansi::RESET);
                } else {
                    frame.push(UNSET);
                }
            }
            frame.push('\n');
        }

        if let Some(cell) = self.path.cells().get(step) {
            frame.push_str(&format!(
                "Path step {}/{} at {}\n",
                step + 1,
                self.steps(),
                cell
            ));
        }

        frame
    }
}
