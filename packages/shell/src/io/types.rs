//! I/O types for the shell.

pub use crate::keys::{Key, Keystroke, Modifiers};

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportSize {
    pub cols: u16,
    pub rows: u16,
}

/// A signal from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The viewport changed size.
    Resize(ViewportSize),
    /// The terminal is going away.
    Close,
}

/// Output to be written by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub text: String,
    pub style: OutputStyle,
}

impl Output {
    pub fn normal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Normal,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Error,
        }
    }

    pub fn echo(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Echo,
        }
    }

    pub fn banner(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: OutputStyle::Banner,
        }
    }
}

/// What kind of output this is. Text already carries any ANSI codes;
/// hosts write it as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    #[default]
    Normal,
    /// A diagnostic from a command.
    Error,
    /// Echo of typed input.
    Echo,
    /// Startup message.
    Banner,
}

/// Marks the end of the prompt.
pub const PROMPT_SUFFIX: &str = "$ ";

/// Prompt configuration sent from core to host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptConfig {
    /// Current working path (formatted with leading /).
    pub current_path: String,
}

impl PromptConfig {
    /// The prompt as written to the terminal, starting on a fresh line.
    pub fn render(&self) -> String {
        format!("\r\n{}{}", self.current_path, PROMPT_SUFFIX)
    }
}

/// Reason the shell exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitReason {
    /// The host closed the terminal.
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_renders_on_new_line() {
        let prompt = PromptConfig {
            current_path: "/about_me".to_string(),
        };
        assert_eq!(prompt.render(), "\r\n/about_me$ ");
    }

    #[test]
    fn output_constructors_set_style() {
        assert_eq!(Output::normal("a").style, OutputStyle::Normal);
        assert_eq!(Output::error("a").style, OutputStyle::Error);
        assert_eq!(Output::echo("a").style, OutputStyle::Echo);
        assert_eq!(Output::banner("a").style, OutputStyle::Banner);
    }
}
