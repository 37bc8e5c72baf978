use thiserror::Error;

use crate::core::data::complex::Complex;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum PlaneRegionError {
    #[error(
        "plane region bounds must satisfy min < max: x [{x_min}, {x_max}], y [{y_min}, {y_max}]"
    )]
    InvalidBounds {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}

/// Axis-aligned window onto the complex plane.
///
/// Construction rejects empty, inverted and non-finite bounds, so every
/// `PlaneRegion` has a strictly positive width and height.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneRegion {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl PlaneRegion {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, PlaneRegionError> {
        let finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());

        if !finite || x_max <= x_min || y_max <= y_min {
            return Err(PlaneRegionError::InvalidBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn contains(&self, point: Complex) -> bool {
        self.x_min <= point.real
            && point.real <= self.x_max
            && self.y_min <= point.imag
            && point.imag <= self.y_max
    }
}
