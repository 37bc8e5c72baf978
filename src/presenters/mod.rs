pub mod recording;
pub mod terminal;
