mod controllers;
mod core;
mod environment;
mod presenters;
mod scenarios;
mod storage;
mod sync;
mod telemetry;

pub use controllers::cli::args::CliArgs;
pub use controllers::cli::benchmark::{BenchmarkController, BenchmarkError, BenchmarkSettings};
pub use controllers::suite::demo::run_demo;
pub use controllers::suite::errors::SuiteError;
pub use controllers::suite::runner::{
    run_fractal_scenario, run_resolution_scaling, run_scenario, run_suite,
    run_wavefront_scenario, ScalingResult,
};

pub use crate::core::data::cell::{Cell, Direction};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::dimensions::{Dimensions, DimensionsError};
pub use crate::core::data::elapsed::Elapsed;
pub use crate::core::data::plane_region::{PlaneRegion, PlaneRegionError};
pub use crate::core::fractals::mandelbrot::algorithm::escape_iterations;
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::renderer::{FractalFieldRenderer, RenderOptions, RenderReport};
pub use crate::core::planners::wavefront::distance_field::DistanceField;
pub use crate::core::planners::wavefront::errors::WavefrontError;
pub use crate::core::planners::wavefront::obstacle_field::{ObstacleField, Terrain};
pub use crate::core::planners::wavefront::path::Path;
pub use crate::core::planners::wavefront::planner::{PlanReport, WavefrontPathPlanner};
pub use crate::core::ports::pacer::{NoDelayPacer, Pacer, RecordingPacer, ThreadSleepPacer};
pub use crate::core::ports::presentation_sink::{NullSink, PresentationSink};

pub use environment::{detect as detect_environment, EnvironmentLabels, EnvironmentProbe};
pub use presenters::recording::recording_sink::RecordingSink;
pub use presenters::terminal::ansi_terminal::AnsiTerminalSink;
pub use scenarios::timings::ScenarioTimings;
pub use scenarios::{FractalScenario, ScenarioId, WavefrontScenario};
pub use storage::ledger::document::{count_table_rows, LedgerDocument};
pub use storage::ledger::errors::LedgerError;
pub use storage::ledger::row::{LedgerRow, RunDescription};
pub use storage::ledger::writer::{Ledger, DEFAULT_LEDGER_FILE};
pub use sync::errors::SyncError;
pub use sync::gist::{GistId, GistSync, Published, RemoteSync};
pub use sync::transport::CurlTransport;
pub use telemetry::init_tracing;
