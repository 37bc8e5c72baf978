use crate::core::fractals::mandelbrot::glyph_mapping::kinds::GlyphMapKinds;
use crate::core::fractals::mandelbrot::glyph_mapping::map::GlyphMap;

/// Sparse to dense.
const RAMP: [&str; 10] = [" ", ".", ":", "-", "=", "+", "*", "#", "%", "@"];
const IN_SET: &str = "#";

#[derive(Debug, Clone, Copy)]
pub struct AsciiRamp {
    max_iterations: u32,
}

impl AsciiRamp {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    #[must_use]
    pub fn ramp_index(&self, iterations: u32) -> usize {
        let last = RAMP.len() - 1;
        let scaled = u64::from(iterations) * last as u64 / u64::from(self.max_iterations.max(1));

        (scaled as usize).min(last)
    }
}

impl GlyphMap for AsciiRamp {
    fn kind(&self) -> GlyphMapKinds {
        GlyphMapKinds::AsciiRamp
    }

    fn glyph(&self, iterations: u32) -> &'static str {
        if iterations >= self.max_iterations {
            return IN_SET;
        }

        RAMP[self.ramp_index(iterations)]
    }
}
