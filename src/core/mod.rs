//! The two compute kernels and the data types and ports they are built from.
//!
//! Nothing in here knows about terminals, files or the network: drawing goes
//! through [`ports::presentation_sink::PresentationSink`] and pacing through
//! [`ports::pacer::Pacer`].

pub mod actions;
pub mod data;
pub mod fractals;
pub mod planners;
pub mod ports;
pub mod util;
