//! Keystroke handling for the input line.
//!
//! The shell does its own line editing: printable keys are appended and
//! echoed, backspace erases one character, and enter submits the line.
//! There is no cursor movement; keys such as arrows reach the buffer as
//! their raw escape sequences.

use crate::session::Session;

/// Erases the character left of the cursor on the terminal.
pub const ERASE: &str = "\x08 \x08";

/// The key part of a keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    /// Printable text or a raw escape sequence.
    Text(String),
}

/// Modifier keys held during a keystroke. Shift is not tracked; it is
/// already reflected in the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        alt: false,
        ctrl: false,
        meta: false,
    };

    pub fn any(&self) -> bool {
        self.alt || self.ctrl || self.meta
    }
}

/// A key event from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keystroke {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl Keystroke {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn enter() -> Self {
        Self::new(Key::Enter, Modifiers::NONE)
    }

    pub fn backspace() -> Self {
        Self::new(Key::Backspace, Modifiers::NONE)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Key::Text(text.into()), Modifiers::NONE)
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// The keystrokes for typing `line` and pressing enter.
    pub fn typed(line: &str) -> Vec<Keystroke> {
        line.chars()
            .map(|c| Keystroke::text(c.to_string()))
            .chain(std::iter::once(Keystroke::enter()))
            .collect()
    }
}

/// What a keystroke did to the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The line was submitted; the buffer is now empty.
    Submit(String),
    /// Write this text to the terminal.
    Echo(String),
    Ignored,
}

/// Apply one keystroke to the session's input buffer.
pub fn feed(session: &mut Session, keystroke: &Keystroke) -> KeyOutcome {
    match &keystroke.key {
        Key::Enter => KeyOutcome::Submit(session.take_input()),
        Key::Backspace => match session.pop_input() {
            Some(_) => KeyOutcome::Echo(ERASE.to_string()),
            None => KeyOutcome::Ignored,
        },
        Key::Text(_) if keystroke.modifiers.any() => KeyOutcome::Ignored,
        Key::Text(text) => {
            session.push_input(text);
            KeyOutcome::Echo(text.clone())
        }
    }
}
