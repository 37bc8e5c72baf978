use crate::core::fractals::mandelbrot::glyph_mapping::kinds::GlyphMapKinds;

/// Turns an escape count into the text drawn for one pixel.
pub trait GlyphMap {
    fn kind(&self) -> GlyphMapKinds;

    fn glyph(&self, iterations: u32) -> &'static str;

    fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }
}
