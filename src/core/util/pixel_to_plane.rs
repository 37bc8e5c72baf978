use crate::core::data::complex::Complex;
use crate::core::data::dimensions::Dimensions;
use crate::core::data::plane_region::PlaneRegion;

/// Linear map from pixel indices onto a [`PlaneRegion`].
///
/// Pixel `(col, row)` lands on `x_min + col * width / W`,
/// `y_min + row * height / H`: the left/top edges are sampled, the right and
/// bottom edges are not.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelToPlane {
    x_min: f64,
    y_min: f64,
    x_scale: f64,
    y_scale: f64,
}

impl PixelToPlane {
    #[must_use]
    pub fn new(region: PlaneRegion, pixels: Dimensions) -> Self {
        Self {
            x_min: region.x_min(),
            y_min: region.y_min(),
            x_scale: region.width() / pixels.width() as f64,
            y_scale: region.height() / pixels.height() as f64,
        }
    }

    #[inline]
    #[must_use]
    pub fn real(&self, col: usize) -> f64 {
        self.x_min + col as f64 * self.x_scale
    }

    #[inline]
    #[must_use]
    pub fn imag(&self, row: usize) -> f64 {
        self.y_min + row as f64 * self.y_scale
    }

    #[inline]
    #[must_use]
    pub fn point(&self, col: usize, row: usize) -> Complex {
        Complex {
            real: self.real(col),
            imag: self.imag(row),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> PixelToPlane {
        let region = PlaneRegion::new(-2.0, 2.0, -1.0, 1.0).unwrap();
        let pixels = Dimensions::at_least(4, 4, 1).unwrap();

        PixelToPlane::new(region, pixels)
    }

    #[test]
    fn test_origin_pixel_maps_to_region_minimum() {
        assert_eq!(mapping().point(0, 0), Complex { real: -2.0, imag: -1.0 });
    }

    #[test]
    fn test_centre_pixel() {
        assert_eq!(mapping().point(2, 2), Complex::ZERO);
    }

    #[test]
    fn test_last_pixel_stops_short_of_maximum() {
        let last = mapping().point(3, 3);

        assert_eq!(last.real, 1.0);
        assert_eq!(last.imag, 0.5);
    }
}
