pub mod wavefront;
