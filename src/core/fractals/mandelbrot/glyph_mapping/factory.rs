use crate::core::fractals::mandelbrot::glyph_mapping::{
    kinds::GlyphMapKinds,
    map::GlyphMap,
    maps::{ascii_ramp::AsciiRamp, colour_bands::ColourBands},
};

#[must_use]
pub fn glyph_map_factory(kind: GlyphMapKinds, max_iterations: u32) -> Box<dyn GlyphMap> {
    match kind {
        GlyphMapKinds::AsciiRamp => Box::new(AsciiRamp::new(max_iterations)),
        GlyphMapKinds::ColourBands => Box::new(ColourBands::new(max_iterations)),
    }
}
