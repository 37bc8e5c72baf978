pub mod cell;
pub mod complex;
pub mod dimensions;
pub mod elapsed;
pub mod grid;
pub mod plane_region;
