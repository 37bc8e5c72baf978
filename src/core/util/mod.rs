pub mod ansi;
pub mod pixel_to_plane;
