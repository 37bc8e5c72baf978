use crate::core::data::dimensions::Dimensions;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Pixel size and iteration budget, fixed for a renderer's lifetime.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RendererParams {
    pixels: Dimensions,
    max_iterations: u32,
}

impl RendererParams {
    pub fn new(width: usize, height: usize, max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        let pixels = Dimensions::at_least(width, height, 1)?;

        Ok(Self {
            pixels,
            max_iterations,
        })
    }

    #[must_use]
    pub fn pixels(&self) -> Dimensions {
        self.pixels
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
