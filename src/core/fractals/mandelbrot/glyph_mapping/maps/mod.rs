pub mod ascii_ramp;
pub mod colour_bands;
