//! Host implementations for the shell.
//!
//! The terminal host drives a real terminal in raw mode with crossterm.

pub mod terminal;

pub use terminal::TerminalHost;
