use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::cell::Cell;
use crate::core::data::complex::Complex;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::plane_region::PlaneRegion;
use crate::core::fractals::mandelbrot::params::RendererParams;
use crate::core::util::pixel_to_plane::PixelToPlane;

/// `|z| > 2` compared without the square root.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Number of `z ← z² + c` updates applied before `|z|` first exceeds 2,
/// or `max_iterations` if it never does within the budget.
#[must_use]
pub fn escape_iterations(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}

#[derive(Debug, Clone, Copy)]
pub struct MandelbrotAlgorithm {
    mapping: PixelToPlane,
    pixels: Dimensions,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(region: PlaneRegion, params: RendererParams) -> Self {
        Self {
            mapping: PixelToPlane::new(region, params.pixels()),
            pixels: params.pixels(),
            max_iterations: params.max_iterations(),
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn mapping(&self) -> &PixelToPlane {
        &self.mapping
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = u32;

    fn pixels(&self) -> Dimensions {
        self.pixels
    }

    #[inline]
    fn compute(&self, pixel: Cell) -> u32 {
        escape_iterations(self.mapping.point(pixel.x, pixel.y), self.max_iterations)
    }
}
