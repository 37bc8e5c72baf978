pub mod algorithm;
pub mod errors;
pub mod glyph_mapping;
pub mod params;
pub mod renderer;
