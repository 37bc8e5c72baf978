pub mod args;
pub mod benchmark;
