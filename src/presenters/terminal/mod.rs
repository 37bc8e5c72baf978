pub mod ansi_terminal;
