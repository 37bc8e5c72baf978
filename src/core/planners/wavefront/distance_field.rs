use std::collections::VecDeque;

use crate::core::data::cell::Cell;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::grid::Grid;
use crate::core::planners::wavefront::obstacle_field::ObstacleField;

/// Hop counts from the goal of the last propagation. `None` marks cells the
/// wavefront never reached, which always includes every obstacle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceField {
    distances: Grid<Option<u32>>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PropagationStats {
    /// Cells dequeued, which equals the number of cells that received a distance.
    pub visited: usize,
    pub max_distance: Option<u32>,
}

impl DistanceField {
    #[must_use]
    pub fn unset(dims: Dimensions) -> Self {
        Self {
            distances: Grid::filled(dims, None),
        }
    }

    #[must_use]
    pub fn dims(&self) -> Dimensions {
        self.distances.dims()
    }

    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<u32> {
        self.distances.get(cell).copied().flatten()
    }

    pub fn reset(&mut self) {
        self.distances.fill(None);
    }

    #[must_use]
    pub fn reachable_cells(&self) -> usize {
        self.distances.iter().filter(|(_, d)| d.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, Option<u32>)> {
        self.distances.iter().map(|(cell, d)| (cell, *d))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<u32>]> {
        self.distances.rows()
    }

    /// Resets the field and runs a breadth-first wavefront out of `goal`.
    ///
    /// Each free, unassigned neighbour (scanned up, down, left, right) gets
    /// `distance(current) + 1` and is queued exactly once. `on_dequeue` sees
    /// the field every time a cell is taken off the queue. An obstacle goal
    /// seeds nothing and leaves the whole field unset.
    pub fn propagate_from<F>(
        &mut self,
        goal: Cell,
        obstacles: &ObstacleField,
        mut on_dequeue: F,
    ) -> PropagationStats
    where
        F: FnMut(&Self),
    {
        self.reset();

        let mut stats = PropagationStats::default();

        if !obstacles.is_free(goal) {
            return stats;
        }

        let dims = self.dims();
        let mut queue = VecDeque::with_capacity(dims.area());

        self.assign(goal, 0);
        queue.push_back((goal, 0u32));

        while let Some((cell, distance)) = queue.pop_front() {
            on_dequeue(self);

            stats.visited += 1;
            stats.max_distance = Some(distance);

            let next = distance + 1;
            for neighbour in cell.neighbours(dims) {
                if obstacles.is_free(neighbour) && self.get(neighbour).is_none() {
                    self.assign(neighbour, next);
                    queue.push_back((neighbour, next));
                }
            }
        }

        stats
    }

    fn assign(&mut self, cell: Cell, distance: u32) {
        if let Some(slot) = self.distances.get_mut(cell) {
            *slot = Some(distance);
        }
    }
}
