//! The fixed benchmark scenario set shared by the suite runner and the ledger.

pub mod timings;

use std::fmt;

use crate::core::data::cell::Cell;
use crate::core::data::plane_region::{PlaneRegion, PlaneRegionError};
use crate::core::planners::wavefront::obstacle_field::is_pillar;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScenarioId {
    FractalFull,
    FractalZoom1,
    FractalZoom2,
    FractalDeepZoom,
    Wavefront50,
    Wavefront100,
    Wavefront200,
    Wavefront400,
}

impl ScenarioId {
    /// Ledger column order.
    pub const ALL: [Self; 8] = [
        Self::FractalFull,
        Self::FractalZoom1,
        Self::FractalZoom2,
        Self::FractalDeepZoom,
        Self::Wavefront50,
        Self::Wavefront100,
        Self::Wavefront200,
        Self::Wavefront400,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FractalFull => "fractal-full",
            Self::FractalZoom1 => "fractal-zoom1",
            Self::FractalZoom2 => "fractal-zoom2",
            Self::FractalDeepZoom => "fractal-deepzoom",
            Self::Wavefront50 => "wavefront-50",
            Self::Wavefront100 => "wavefront-100",
            Self::Wavefront200 => "wavefront-200",
            Self::Wavefront400 => "wavefront-400",
        }
    }

    #[must_use]
    pub const fn column_title(self) -> &'static str {
        match self {
            Self::FractalFull => "Mandelbrot Full",
            Self::FractalZoom1 => "Mandelbrot Zoom1",
            Self::FractalZoom2 => "Mandelbrot Zoom2",
            Self::FractalDeepZoom => "Mandelbrot Deep",
            Self::Wavefront50 => "WaveFront 50x50",
            Self::Wavefront100 => "WaveFront 100x100",
            Self::Wavefront200 => "WaveFront 200x200",
            Self::Wavefront400 => "WaveFront 400x400",
        }
    }

    /// Name used in console output and the copy-paste report.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FractalFull => "Full view",
            Self::FractalZoom1 => "Zoom 1x",
            Self::FractalZoom2 => "Zoom 2x",
            Self::FractalDeepZoom => "Deep zoom",
            Self::Wavefront50 | Self::Wavefront100 | Self::Wavefront200 | Self::Wavefront400 => {
                "WaveFront"
            }
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        match self.params() {
            ScenarioParams::Fractal(scenario) => scenario.label(),
            ScenarioParams::Wavefront(scenario) => scenario.label(),
        }
    }

    #[must_use]
    pub const fn params(self) -> ScenarioParams {
        match self {
            Self::FractalFull => ScenarioParams::Fractal(FractalScenario::full_view(200, 100)),
            Self::FractalZoom1 => ScenarioParams::Fractal(FractalScenario {
                size: 200,
                max_iterations: 150,
                x_min: -1.0,
                x_max: 0.0,
                y_min: -0.5,
                y_max: 0.5,
            }),
            Self::FractalZoom2 => ScenarioParams::Fractal(FractalScenario {
                size: 200,
                max_iterations: 200,
                x_min: -0.75,
                x_max: -0.25,
                y_min: -0.25,
                y_max: 0.25,
            }),
            Self::FractalDeepZoom => ScenarioParams::Fractal(FractalScenario {
                size: 200,
                max_iterations: 500,
                x_min: -0.7463,
                x_max: -0.7453,
                y_min: 0.1102,
                y_max: 0.1112,
            }),
            Self::Wavefront50 => ScenarioParams::Wavefront(WavefrontScenario { size: 50 }),
            Self::Wavefront100 => ScenarioParams::Wavefront(WavefrontScenario { size: 100 }),
            Self::Wavefront200 => ScenarioParams::Wavefront(WavefrontScenario { size: 200 }),
            Self::Wavefront400 => ScenarioParams::Wavefront(WavefrontScenario { size: 400 }),
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ScenarioParams {
    Fractal(FractalScenario),
    Wavefront(WavefrontScenario),
}

/// Square escape-time render of a plane window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalScenario {
    pub size: usize,
    pub max_iterations: u32,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl FractalScenario {
    /// The classic whole-set view, `x ∈ [-2.5, 1.0]`, `y ∈ [-1.25, 1.25]`.
    #[must_use]
    pub const fn full_view(size: usize, max_iterations: u32) -> Self {
        Self {
            size,
            max_iterations,
            x_min: -2.5,
            x_max: 1.0,
            y_min: -1.25,
            y_max: 1.25,
        }
    }

    pub fn region(&self) -> Result<PlaneRegion, PlaneRegionError> {
        PlaneRegion::new(self.x_min, self.x_max, self.y_min, self.y_max)
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{}x{}, {} iter",
            self.size, self.size, self.max_iterations
        )
    }
}

/// Square grid planned corner to corner, just inside the border.
///
/// The goal is `(N-2, N-2)` unless a pillar sits there, which happens when
/// `N % 4 == 0`; it then moves one cell inwards along the diagonal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WavefrontScenario {
    pub size: usize,
}

impl WavefrontScenario {
    #[must_use]
    pub fn start(&self) -> Cell {
        Cell::new(1, 1)
    }

    #[must_use]
    pub fn goal(&self) -> Cell {
        let corner = self.size.saturating_sub(2);
        let goal = Cell::new(corner, corner);

        if is_pillar(goal) {
            Cell::new(corner - 1, corner - 1)
        } else {
            goal
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("{}x{} grid", self.size, self.size)
    }
}

/// Square sizes for the console-only resolution scaling run.
pub const RESOLUTION_SCALING_SIZES: [usize; 4] = [100, 200, 400, 800];
/// Iteration budget for the resolution scaling run.
pub const RESOLUTION_SCALING_ITERATIONS: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique_and_ordered() {
        let keys: Vec<&str> = ScenarioId::ALL.iter().map(|id| id.key()).collect();

        assert_eq!(keys.first(), Some(&"fractal-full"));
        assert_eq!(keys.last(), Some(&"wavefront-400"));
        for (i, key) in keys.iter().enumerate() {
            assert!(!keys[i + 1..].contains(key), "duplicate key {key}");
        }
    }

    #[test]
    fn test_every_fractal_scenario_has_valid_region() {
        for id in ScenarioId::ALL {
            if let ScenarioParams::Fractal(scenario) = id.params() {
                assert!(scenario.region().is_ok(), "{id} has an invalid region");
            }
        }
    }

    #[test]
    fn test_wavefront_goal_sits_inside_border() {
        let scenario = WavefrontScenario { size: 50 };

        assert_eq!(scenario.start(), Cell::new(1, 1));
        assert_eq!(scenario.goal(), Cell::new(48, 48));
    }

    #[test]
    fn test_wavefront_goal_steps_off_pillar() {
        assert_eq!(WavefrontScenario { size: 100 }.goal(), Cell::new(97, 97));
        assert_eq!(WavefrontScenario { size: 400 }.goal(), Cell::new(397, 397));
        assert_eq!(WavefrontScenario { size: 30 }.goal(), Cell::new(28, 28));
    }

    #[test]
    fn test_deep_zoom_parameters() {
        let ScenarioParams::Fractal(deep) = ScenarioId::FractalDeepZoom.params() else {
            panic!("deep zoom is a fractal scenario");
        };

        assert_eq!(deep.max_iterations, 500);
        assert_eq!(deep.label(), "200x200, 500 iter");
    }
}
