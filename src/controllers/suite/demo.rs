use crate::controllers::suite::errors::SuiteError;
use crate::core::data::cell::Cell;
use crate::core::fractals::mandelbrot::renderer::{FractalFieldRenderer, RenderOptions};
use crate::core::planners::wavefront::planner::WavefrontPathPlanner;
use crate::core::ports::pacer::Pacer;
use crate::core::ports::presentation_sink::PresentationSink;
use crate::scenarios::FractalScenario;

pub const DEMO_FRACTAL_WIDTH: usize = 80;
pub const DEMO_FRACTAL_HEIGHT: usize = 40;
pub const DEMO_FRACTAL_ITERATIONS: u32 = 100;

pub const DEMO_GRID_WIDTH: usize = 30;
pub const DEMO_GRID_HEIGHT: usize = 15;

/// Animated colour fractal followed by an animated wavefront plan.
///
/// `between` runs after the fractal, typically to wait for the user.
pub fn run_demo<S, P>(
    sink: &mut S,
    pacer: &mut P,
    mut between: impl FnMut(),
) -> Result<(), SuiteError>
where
    S: PresentationSink + ?Sized,
    P: Pacer + ?Sized,
{
    let view = FractalScenario::full_view(DEMO_FRACTAL_WIDTH, DEMO_FRACTAL_ITERATIONS);
    let renderer = FractalFieldRenderer::new(
        DEMO_FRACTAL_WIDTH,
        DEMO_FRACTAL_HEIGHT,
        DEMO_FRACTAL_ITERATIONS,
    )?;
    let options = RenderOptions {
        visualize: true,
        progressive: false,
        colour_mode: true,
    };

    let report = renderer.run(view.region()?, options, sink, pacer);
    sink.write_str(&format!("\nTime: {}\n", report.elapsed));
    sink.flush();

    between();

    let mut planner = WavefrontPathPlanner::new(DEMO_GRID_WIDTH, DEMO_GRID_HEIGHT)?;
    let start = Cell::new(1, 1);
    let goal = Cell::new(DEMO_GRID_WIDTH - 2, DEMO_GRID_HEIGHT - 2);

    let report = planner.plan_path(start, goal, true, sink, pacer)?;
    sink.write_str(&format!("\nTime: {}\n", report.elapsed));
    sink.flush();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ports::pacer::RecordingPacer;
    use crate::core::util::ansi;
    use crate::presenters::recording::recording_sink::RecordingSink;

    #[test]
    fn test_demo_draws_both_kernels() {
        let mut sink = RecordingSink::new();
        let mut pacer = RecordingPacer::new();
        let mut paused = 0;

        run_demo(&mut sink, &mut pacer, || paused += 1).unwrap();

        let output = sink.output();
        assert_eq!(paused, 1);
        assert!(output.starts_with(ansi::CLEAR_SCREEN));
        assert!(output.contains("\x1b[4"));
        assert!(output.contains("Path planning completed!"));
        assert!(output.contains("Optimal path completed!"));
        assert!(!pacer.pauses().is_empty());
    }
}
