//! ANSI escape sequences used by the terminal visualisations.

pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
pub const RESET: &str = "\x1b[0m";

pub const BOLD_YELLOW: &str = "\x1b[1;33m";
pub const BOLD_GREEN: &str = "\x1b[1;32m";
pub const DIM: &str = "\x1b[2m";
