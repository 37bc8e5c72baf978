use tracing::info;

use crate::controllers::suite::errors::SuiteError;
use crate::core::data::elapsed::Elapsed;
use crate::core::fractals::mandelbrot::renderer::{FractalFieldRenderer, RenderOptions, RenderReport};
use crate::core::planners::wavefront::planner::{PlanReport, WavefrontPathPlanner};
use crate::core::ports::pacer::NoDelayPacer;
use crate::core::ports::presentation_sink::NullSink;
use crate::scenarios::timings::ScenarioTimings;
use crate::scenarios::{
    FractalScenario, ScenarioId, ScenarioParams, WavefrontScenario, RESOLUTION_SCALING_ITERATIONS,
    RESOLUTION_SCALING_SIZES,
};

/// Headless render on a freshly built renderer.
pub fn run_fractal_scenario(scenario: &FractalScenario) -> Result<RenderReport, SuiteError> {
    let region = scenario.region()?;
    let renderer =
        FractalFieldRenderer::new(scenario.size, scenario.size, scenario.max_iterations)?;

    Ok(renderer.run(region, RenderOptions::HEADLESS, &mut NullSink, &mut NoDelayPacer))
}

/// Headless plan on a freshly built planner.
pub fn run_wavefront_scenario(scenario: &WavefrontScenario) -> Result<PlanReport, SuiteError> {
    let mut planner = WavefrontPathPlanner::new(scenario.size, scenario.size)?;

    Ok(planner.plan_path(
        scenario.start(),
        scenario.goal(),
        false,
        &mut NullSink,
        &mut NoDelayPacer,
    )?)
}

pub fn run_scenario(id: ScenarioId) -> Result<Elapsed, SuiteError> {
    let elapsed = match id.params() {
        ScenarioParams::Fractal(scenario) => run_fractal_scenario(&scenario)?.elapsed,
        ScenarioParams::Wavefront(scenario) => run_wavefront_scenario(&scenario)?.elapsed,
    };

    info!(scenario = %id, elapsed_ms = elapsed.as_millis_f64(), "scenario finished");
    Ok(elapsed)
}

/// Runs every ledger scenario in column order, calling `on_result` after each.
pub fn run_suite(
    mut on_result: impl FnMut(ScenarioId, Elapsed),
) -> Result<ScenarioTimings, SuiteError> {
    let mut timings = ScenarioTimings::new();

    for id in ScenarioId::ALL {
        let elapsed = run_scenario(id)?;
        on_result(id, elapsed);
        timings.record(id, elapsed);
    }

    Ok(timings)
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScalingResult {
    pub size: usize,
    pub elapsed: Elapsed,
}

/// Full-view renders at growing square sizes. Console only, never in the ledger.
pub fn run_resolution_scaling(
    sizes: &[usize],
    mut on_result: impl FnMut(&ScalingResult),
) -> Result<Vec<ScalingResult>, SuiteError> {
    sizes
        .iter()
        .map(|&size| {
            let scenario = FractalScenario::full_view(size, RESOLUTION_SCALING_ITERATIONS);
            let result = ScalingResult {
                size,
                elapsed: run_fractal_scenario(&scenario)?.elapsed,
            };
            on_result(&result);
            Ok(result)
        })
        .collect()
}

/// The standard resolution scaling sizes.
pub fn run_default_resolution_scaling(
    on_result: impl FnMut(&ScalingResult),
) -> Result<Vec<ScalingResult>, SuiteError> {
    run_resolution_scaling(&RESOLUTION_SCALING_SIZES, on_result)
}
