use std::time::{Duration, Instant};

use tracing::debug;

use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::cell::Cell;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::elapsed::Elapsed;
use crate::core::data::plane_region::PlaneRegion;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::glyph_mapping::factory::glyph_map_factory;
use crate::core::fractals::mandelbrot::glyph_mapping::kinds::GlyphMapKinds;
use crate::core::fractals::mandelbrot::params::RendererParams;
use crate::core::ports::pacer::Pacer;
use crate::core::ports::presentation_sink::PresentationSink;
use crate::core::util::ansi;

/// Delay after every even-indexed row in progressive mode.
pub const PROGRESSIVE_ROW_DELAY: Duration = Duration::from_millis(50);

/// Side-effect switches for a render. None of them change the computed field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub visualize: bool,
    pub progressive: bool,
    pub colour_mode: bool,
}

impl RenderOptions {
    /// Timing-only run: nothing is drawn.
    pub const HEADLESS: Self = Self {
        visualize: false,
        progressive: false,
        colour_mode: false,
    };

    #[must_use]
    pub fn glyph_kind(&self) -> GlyphMapKinds {
        if self.colour_mode {
            GlyphMapKinds::ColourBands
        } else {
            GlyphMapKinds::AsciiRamp
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            visualize: true,
            progressive: false,
            colour_mode: false,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderReport {
    /// Covers the whole pixel sweep, including any drawing done during it.
    pub elapsed: Elapsed,
    /// Pixels that exhausted the iteration budget.
    pub in_set_pixels: usize,
}

/// Escape-time renderer with its pixel size and iteration budget fixed at
/// construction.
#[derive(Debug, Clone, Copy)]
pub struct FractalFieldRenderer {
    params: RendererParams,
}

impl FractalFieldRenderer {
    pub fn new(width: usize, height: usize, max_iterations: u32) -> Result<Self, MandelbrotError> {
        Ok(Self {
            params: RendererParams::new(width, height, max_iterations)?,
        })
    }

    #[must_use]
    pub fn pixels(&self) -> Dimensions {
        self.params.pixels()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.params.max_iterations()
    }

    /// Sweeps every pixel of `region` row by row and times the sweep.
    ///
    /// With `visualize` the screen is cleared first and each pixel is drawn to
    /// `sink` as soon as it is computed; progressive mode flushes and pauses
    /// after every even-indexed row.
    pub fn run<S, P>(
        &self,
        region: PlaneRegion,
        options: RenderOptions,
        sink: &mut S,
        pacer: &mut P,
    ) -> RenderReport
    where
        S: PresentationSink + ?Sized,
        P: Pacer + ?Sized,
    {
        let algorithm = MandelbrotAlgorithm::new(region, self.params);
        let glyphs = glyph_map_factory(options.glyph_kind(), self.max_iterations());
        let pixels = self.pixels();
        let max_iterations = self.max_iterations();
        let mut in_set_pixels = 0;

        let start = Instant::now();

        if options.visualize {
            sink.write_str(ansi::CLEAR_SCREEN);
        }

        for row in 0..pixels.height() {
            for col in 0..pixels.width() {
                let iterations = algorithm.compute(Cell::new(col, row));

                if iterations >= max_iterations {
                    in_set_pixels += 1;
                }

                if options.visualize {
                    sink.write_str(glyphs.glyph(iterations));
                }
            }

            if options.visualize {
                sink.write_str("\n");

                if options.progressive && row % 2 == 0 {
                    sink.flush();
                    pacer.pause(PROGRESSIVE_ROW_DELAY);
                }
            }
        }

        if options.visualize {
            sink.flush();
        }

        let elapsed = Elapsed::since(start);

        debug!(
            width = pixels.width(),
            height = pixels.height(),
            max_iterations,
            in_set_pixels,
            elapsed_ms = elapsed.as_millis_f64(),
            glyphs = glyphs.display_name(),
            "fractal sweep finished"
        );

        RenderReport {
            elapsed,
            in_set_pixels,
        }
    }

    /// Untimed per-pixel escape counts for `region`, row-major.
    #[must_use]
    pub fn iteration_field(&self, region: PlaneRegion) -> Vec<u32> {
        generate_fractal(&MandelbrotAlgorithm::new(region, self.params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ports::pacer::{NoDelayPacer, RecordingPacer};
    use crate::core::ports::presentation_sink::NullSink;
    use crate::presenters::recording::recording_sink::RecordingSink;

    fn full_view() -> PlaneRegion {
        PlaneRegion::new(-2.5, 1.0, -1.25, 1.25).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_budget() {
        assert_eq!(
            FractalFieldRenderer::new(10, 10, 0).unwrap_err(),
            MandelbrotError::ZeroMaxIterations
        );
    }

    #[test]
    fn test_headless_run_draws_nothing() {
        let renderer = FractalFieldRenderer::new(20, 10, 30).unwrap();
        let mut sink = RecordingSink::new();

        renderer.run(full_view(), RenderOptions::HEADLESS, &mut sink, &mut NoDelayPacer);

        assert!(sink.output().is_empty());
        assert_eq!(sink.flushes(), 0);
    }

    #[test]
    fn test_in_set_count_matches_field() {
        let renderer = FractalFieldRenderer::new(40, 20, 60).unwrap();
        let field = renderer.iteration_field(full_view());
        let expected = field.iter().filter(|&&i| i == 60).count();

        let report = renderer.run(full_view(), RenderOptions::HEADLESS, &mut NullSink, &mut NoDelayPacer);

        assert_eq!(report.in_set_pixels, expected);
        assert!(expected > 0);
    }

    #[test]
    fn test_ascii_frame_layout() {
        let renderer = FractalFieldRenderer::new(12, 5, 40).unwrap();
        let mut sink = RecordingSink::new();

        renderer.run(full_view(), RenderOptions::default(), &mut sink, &mut NoDelayPacer);

        let body = sink.output().strip_prefix(ansi::CLEAR_SCREEN).unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|line| line.chars().count() == 12));
        assert!(body.ends_with('\n'));
    }

    #[test]
    fn test_ascii_frame_matches_field() {
        let renderer = FractalFieldRenderer::new(16, 8, 25).unwrap();
        let field = renderer.iteration_field(full_view());
        let ramp = glyph_map_factory(GlyphMapKinds::AsciiRamp, 25);
        let mut expected = String::from(ansi::CLEAR_SCREEN);
        for row in field.chunks(16) {
            for &iterations in row {
                expected.push_str(ramp.glyph(iterations));
            }
            expected.push('\n');
        }

        let mut sink = RecordingSink::new();
        renderer.run(full_view(), RenderOptions::default(), &mut sink, &mut NoDelayPacer);

        assert_eq!(sink.output(), expected);
    }

    #[test]
    fn test_colour_mode_uses_background_bands() {
        let renderer = FractalFieldRenderer::new(30, 10, 50).unwrap();
        let mut sink = RecordingSink::new();
        let options = RenderOptions {
            colour_mode: true,
            ..RenderOptions::default()
        };

        renderer.run(full_view(), options, &mut sink, &mut NoDelayPacer);

        assert!(sink.output().contains("\x1b[40m \x1b[0m"));
        assert!(sink.output().contains("\x1b[44m \x1b[0m"));
    }

    #[test]
    fn test_progressive_pauses_after_even_rows() {
        let renderer = FractalFieldRenderer::new(8, 5, 20).unwrap();
        let mut sink = RecordingSink::new();
        let mut pacer = RecordingPacer::new();
        let options = RenderOptions {
            progressive: true,
            ..RenderOptions::default()
        };

        renderer.run(full_view(), options, &mut sink, &mut pacer);

        // rows 0, 2 and 4
        assert_eq!(pacer.pauses(), &[PROGRESSIVE_ROW_DELAY; 3]);
        assert_eq!(sink.flushes(), 4);
    }

    #[test]
    fn test_non_progressive_never_pauses() {
        let renderer = FractalFieldRenderer::new(8, 6, 20).unwrap();
        let mut pacer = RecordingPacer::new();

        renderer.run(full_view(), RenderOptions::default(), &mut RecordingSink::new(), &mut pacer);

        assert!(pacer.pauses().is_empty());
    }

    #[test]
    fn test_repeated_runs_draw_identical_frames() {
        let renderer = FractalFieldRenderer::new(24, 12, 80).unwrap();
        let mut first = RecordingSink::new();
        let mut second = RecordingSink::new();

        let a = renderer.run(full_view(), RenderOptions::default(), &mut first, &mut NoDelayPacer);
        let b = renderer.run(full_view(), RenderOptions::default(), &mut second, &mut NoDelayPacer);

        assert_eq!(first.output(), second.output());
        assert_eq!(a.in_set_pixels, b.in_set_pixels);
    }
}
