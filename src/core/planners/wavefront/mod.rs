pub mod display;
pub mod distance_field;
pub mod errors;
pub mod obstacle_field;
pub mod path;
pub mod planner;
