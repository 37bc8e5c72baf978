use crate::core::fractals::mandelbrot::glyph_mapping::kinds::GlyphMapKinds;
use crate::core::fractals::mandelbrot::glyph_mapping::map::GlyphMap;

// Blue, cyan, green, yellow, red, magenta backgrounds.
const BANDS: [&str; 6] = [
    "\x1b[44m \x1b[0m",
    "\x1b[46m \x1b[0m",
    "\x1b[42m \x1b[0m",
    "\x1b[43m \x1b[0m",
    "\x1b[41m \x1b[0m",
    "\x1b[45m \x1b[0m",
];
const IN_SET: &str = "\x1b[40m \x1b[0m";

#[derive(Debug, Clone, Copy)]
pub struct ColourBands {
    max_iterations: u32,
}

impl ColourBands {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    #[must_use]
    pub fn band_index(&self, iterations: u32) -> usize {
        let bands = BANDS.len() as u64;
        let scaled = u64::from(iterations) * bands / u64::from(self.max_iterations.max(1));

        (scaled as usize).min(BANDS.len() - 1)
    }
}

impl GlyphMap for ColourBands {
    fn kind(&self) -> GlyphMapKinds {
        GlyphMapKinds::ColourBands
    }

    fn glyph(&self, iterations: u32) -> &'static str {
        if iterations >= self.max_iterations {
            return IN_SET;
        }

        BANDS[self.band_index(iterations)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_set_is_black_background() {
        assert_eq!(ColourBands::new(60).glyph(60), "\x1b[40m \x1b[0m");
    }

    #[test]
    fn test_first_band_is_blue() {
        assert_eq!(ColourBands::new(60).glyph(0), "\x1b[44m \x1b[0m");
    }

    #[test]
    fn test_band_boundaries() {
        let bands = ColourBands::new(60);

        assert_eq!(bands.band_index(9), 0);
        assert_eq!(bands.band_index(10), 1);
        assert_eq!(bands.band_index(59), 5);
        assert_eq!(bands.glyph(59), "\x1b[45m \x1b[0m");
    }

    #[test]
    fn test_band_index_clamped_to_five() {
        assert_eq!(ColourBands::new(60).band_index(600), 5);
    }

    #[test]
    fn test_every_glyph_resets_attributes() {
        let bands = ColourBands::new(6);

        for iterations in 0..=6 {
            assert!(bands.glyph(iterations).ends_with("\x1b[0m"));
        }
    }
}
