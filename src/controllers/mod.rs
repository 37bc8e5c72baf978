pub mod cli;
pub mod suite;
