use thiserror::Error;

use crate::core::data::plane_region::PlaneRegionError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::planners::wavefront::errors::WavefrontError;

#[derive(Debug, PartialEq, Error)]
pub enum SuiteError {
    #[error("invalid plane region")]
    Region(#[from] PlaneRegionError),
    #[error("invalid renderer parameters")]
    Renderer(#[from] MandelbrotError),
    #[error("invalid planner parameters")]
    Planner(#[from] WavefrontError),
}
