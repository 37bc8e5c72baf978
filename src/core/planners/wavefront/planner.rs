use std::time::{Duration, Instant};

use tracing::debug;

use crate::core::data::cell::Cell;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::elapsed::Elapsed;
use crate::core::planners::wavefront::display::{distance_frame, PathOverlay};
use crate::core::planners::wavefront::distance_field::DistanceField;
use crate::core::planners::wavefront::errors::WavefrontError;
use crate::core::planners::wavefront::obstacle_field::ObstacleField;
use crate::core::planners::wavefront::path::{reconstruct_path, Path};
use crate::core::ports::pacer::Pacer;
use crate::core::ports::presentation_sink::PresentationSink;

/// Smallest width and height that leave an interior inside the border.
pub const MIN_GRID_SIZE: usize = 3;

/// Pause after every wavefront redraw.
pub const PROPAGATION_STEP_DELAY: Duration = Duration::from_millis(50);
/// Pause before the path animation and after every path step.
pub const PATH_STEP_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlanReport {
    /// Covers the propagation only; path animation is never timed.
    pub elapsed: Elapsed,
    /// Hop count from start to goal, `None` when the start was not reached.
    pub path_length: Option<u32>,
    pub visited_cells: usize,
}

impl PlanReport {
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.path_length.is_some()
    }
}

/// Breadth-first wavefront planner over the standard obstacle grid.
///
/// The obstacle field is built once; the distance field is rebuilt by every
/// [`plan_path`](Self::plan_path).
#[derive(Debug, Clone)]
pub struct WavefrontPathPlanner {
    obstacles: ObstacleField,
    distances: DistanceField,
}

impl WavefrontPathPlanner {
    pub fn new(width: usize, height: usize) -> Result<Self, WavefrontError> {
        let dims = Dimensions::at_least(width, height, MIN_GRID_SIZE)?;

        Ok(Self {
            obstacles: ObstacleField::standard(dims),
            distances: DistanceField::unset(dims),
        })
    }

    #[must_use]
    pub fn dims(&self) -> Dimensions {
        self.obstacles.dims()
    }

    #[must_use]
    pub fn obstacles(&self) -> &ObstacleField {
        &self.obstacles
    }

    /// Distances left by the most recent propagation.
    #[must_use]
    pub fn distances(&self) -> &DistanceField {
        &self.distances
    }

    /// Propagates a wavefront out of `goal` and times it.
    ///
    /// With `visualize` every dequeue redraws the grid and pauses inside the
    /// timed region. Afterwards, if `start` was reached, the path is traced
    /// and animated step by step outside the timed region. An unreachable
    /// start is a normal outcome, reported through `path_length`.
    pub fn plan_path<S, P>(
        &mut self,
        start: Cell,
        goal: Cell,
        visualize: bool,
        sink: &mut S,
        pacer: &mut P,
    ) -> Result<PlanReport, WavefrontError>
    where
        S: PresentationSink + ?Sized,
        P: Pacer + ?Sized,
    {
        self.check_bounds("start", start)?;
        self.check_bounds("goal", goal)?;

        let obstacles = &self.obstacles;

        let started = Instant::now();
        let stats = self.distances.propagate_from(goal, obstacles, |distances| {
            if visualize {
                sink.write_str(&distance_frame(obstacles, distances));
                sink.flush();
                pacer.pause(PROPAGATION_STEP_DELAY);
            }
        });
        let elapsed = Elapsed::since(started);

        let path_length = self.distances.get(start);

        debug!(
            width = self.dims().width(),
            height = self.dims().height(),
            %start,
            %goal,
            visited = stats.visited,
            max_distance = ?stats.max_distance,
            ?path_length,
            elapsed_ms = elapsed.as_millis_f64(),
            "wavefront propagation finished"
        );

        if visualize {
            self.present_outcome(start, goal, path_length, sink, pacer);
        }

        Ok(PlanReport {
            elapsed,
            path_length,
            visited_cells: stats.visited,
        })
    }

    /// Shortest path over the current distance field, if `start` was reached.
    #[must_use]
    pub fn reconstruct_path(&self, start: Cell, goal: Cell) -> Option<Path> {
        reconstruct_path(&self.distances, start, goal)
    }

    fn check_bounds(&self, role: &'static str, cell: Cell) -> Result<(), WavefrontError> {
        let dims = self.dims();

        if dims.contains(cell) {
            return Ok(());
        }

        Err(WavefrontError::OutOfBounds {
            role,
            cell,
            width: dims.width(),
            height: dims.height(),
        })
    }

    fn present_outcome<S, P>(
        &self,
        start: Cell,
        goal: Cell,
        path_length: Option<u32>,
        sink: &mut S,
        pacer: &mut P,
    ) where
        S: PresentationSink + ?Sized,
        P: Pacer + ?Sized,
    {
        sink.write_str(&distance_frame(&self.obstacles, &self.distances));
        sink.write_str("\nPath planning completed!\n");

        match path_length {
            Some(length) => sink.write_str(&format!("Path length from start to goal: {length}\n")),
            None => sink.write_str("Path length from start to goal: unreachable\n"),
        }
        sink.flush();

        let Some(path) = self.reconstruct_path(start, goal) else {
            return;
        };

        sink.write_str("\nTracing optimal path (start to goal)...\n");
        sink.flush();
        pacer.pause(PATH_STEP_DELAY);

        let overlay = PathOverlay::new(&path, &self.distances);
        for step in 0..overlay.steps() {
            sink.write_str(&overlay.frame(&self.obstacles, &self.distances, step));
            sink.flush();
            pacer.pause(PATH_STEP_DELAY);
        }

        sink.write_str("\nOptimal path completed!\n");
        sink.flush();
    }
}
