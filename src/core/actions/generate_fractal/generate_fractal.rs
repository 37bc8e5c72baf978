use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Evaluates `algorithm` for every pixel, row-major, on the calling thread.
pub fn generate_fractal<Alg: FractalAlgorithm>(algorithm: &Alg) -> Vec<Alg::Output> {
    algorithm
        .pixels()
        .cells()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::cell::Cell;
    use crate::core::data::dimensions::Dimensions;

    struct IndexAlgorithm {
        pixels: Dimensions,
    }

    impl FractalAlgorithm for IndexAlgorithm {
        type Output = usize;

        fn pixels(&self) -> Dimensions {
            self.pixels
        }

        fn compute(&self, pixel: Cell) -> usize {
            pixel.y * 100 + pixel.x
        }
    }

    #[test]
    fn test_generate_fractal_is_row_major() {
        let algorithm = IndexAlgorithm {
            pixels: Dimensions::at_least(3, 2, 1).unwrap(),
        };

        let values = generate_fractal(&algorithm);

        assert_eq!(values, vec![0, 1, 2, 100, 101, 102]);
    }
}
