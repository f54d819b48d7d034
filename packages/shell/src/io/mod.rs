//! I/O abstraction for the shell.
//!
//! This module defines the interface between the shell core and the
//! terminal it draws on. The core interacts only through the `IoHost` trait,
//! so the same loop runs against a real terminal or an in-memory host.

pub mod types;

#[cfg(test)]
pub mod test_host;

pub use types::*;

#[cfg(test)]
pub use test_host::TestHost;

/// Error type for I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io(e.to_string())
    }
}

/// Host interface for terminal I/O.
///
/// The shell reads one keystroke at a time and does its own line editing,
/// so a host only delivers raw key events and draws what it is told.
pub trait IoHost {
    /// Wait for the next event.
    ///
    /// Hosts may return without an event after a short interval so the core
    /// can do background work. After this returns, `read_signal()` or
    /// `read_key()` yields the event, if any.
    fn wait_for_event(&mut self) -> Result<(), IoError>;

    /// Read the next keystroke, if one is pending.
    fn read_key(&mut self) -> Result<Option<Keystroke>, IoError>;

    /// Read any pending signal (resize, close).
    fn read_signal(&mut self) -> Result<Option<Signal>, IoError>;

    /// Write output to the terminal.
    fn write_output(&mut self, output: Output) -> Result<(), IoError>;

    /// Draw the prompt.
    fn write_prompt(&mut self, config: PromptConfig) -> Result<(), IoError>;

    /// Erase everything previously written.
    fn clear(&mut self) -> Result<(), IoError>;

    /// Adapt to a new viewport size.
    fn fit_viewport(&mut self, size: ViewportSize) -> Result<(), IoError>;

    /// Flush any buffered output.
    fn flush(&mut self) -> Result<(), IoError> {
        Ok(())
    }

    /// Release the terminal.
    fn close(&mut self) -> Result<(), IoError> {
        Ok(())
    }
}
