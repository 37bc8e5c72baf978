use thiserror::Error;

use crate::core::data::dimensions::DimensionsError;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum MandelbrotError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("invalid pixel size: {0}")]
    Pixels(#[from] DimensionsError),
}
