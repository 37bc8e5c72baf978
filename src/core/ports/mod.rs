//! Capabilities the kernels are handed instead of touching the terminal or
//! the clock directly.

pub mod pacer;
pub mod presentation_sink;
