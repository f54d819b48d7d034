//! Terminal host implementation using crossterm.
//!
//! The terminal runs in raw mode so every key reaches the shell, which does
//! its own echo and line editing. Ctrl+C and Ctrl+D close the shell.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};

use crate::io::{
    IoError, IoHost, Key, Keystroke, Modifiers, Output, PromptConfig, Signal, ViewportSize,
};

/// How long `wait_for_event` blocks before handing control back.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Terminal host over stdout.
pub struct TerminalHost {
    stdout: Stdout,
    pending_key: Option<Keystroke>,
    pending_signal: Option<Signal>,
    viewport: ViewportSize,
    raw: bool,
}

impl TerminalHost {
    /// Put the terminal in raw mode and take it over.
    pub fn new() -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        terminal::enable_raw_mode()?;
        Ok(Self {
            stdout: io::stdout(),
            pending_key: None,
            pending_signal: None,
            viewport: ViewportSize { cols, rows },
            raw: true,
        })
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.raw {
            self.raw = false;
            terminal::disable_raw_mode()?;
            write!(self.stdout, "\r\n")?;
            self.stdout.flush()?;
        }
        Ok(())
    }
}

impl IoHost for TerminalHost {
    fn wait_for_event(&mut self) -> Result<(), IoError> {
        if !event::poll(POLL_INTERVAL)? {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) => match translate_key(key) {
                Some(Translated::Key(keystroke)) => self.pending_key = Some(keystroke),
                Some(Translated::Signal(signal)) => self.pending_signal = Some(signal),
                None => {}
            },
            Event::Resize(cols, rows) => {
                self.pending_signal = Some(Signal::Resize(ViewportSize { cols, rows }));
            }
            _ => {}
        }
        Ok(())
    }

    fn read_key(&mut self) -> Result<Option<Keystroke>, IoError> {
        Ok(self.pending_key.take())
    }

    fn read_signal(&mut self) -> Result<Option<Signal>, IoError> {
        Ok(self.pending_signal.take())
    }

    fn write_output(&mut self, output: Output) -> Result<(), IoError> {
        self.stdout.write_all(output.text.as_bytes())?;
        Ok(())
    }

    fn write_prompt(&mut self, config: PromptConfig) -> Result<(), IoError> {
        self.stdout.write_all(config.render().as_bytes())?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), IoError> {
        execute!(
            self.stdout,
            terminal::Clear(terminal::ClearType::All),
            terminal::Clear(terminal::ClearType::Purge),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    fn fit_viewport(&mut self, size: ViewportSize) -> Result<(), IoError> {
        log::debug!("Viewport is now {}x{}", size.cols, size.rows);
        self.viewport = size;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), IoError> {
        self.stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), IoError> {
        self.restore()?;
        Ok(())
    }
}

impl Drop for TerminalHost {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Translated {
    Key(Keystroke),
    Signal(Signal),
}

/// Map a crossterm key event to what the shell sees.
fn translate_key(event: KeyEvent) -> Option<Translated> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let modifiers = Modifiers {
        alt: event.modifiers.contains(KeyModifiers::ALT),
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        meta: event
            .modifiers
            .intersects(KeyModifiers::SUPER | KeyModifiers::META),
    };

    let key = match event.code {
        KeyCode::Char('c') | KeyCode::Char('d') if modifiers.ctrl => {
            return Some(Translated::Signal(Signal::Close));
        }
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Char(c) => Key::Text(c.to_string()),
        KeyCode::Tab => Key::Text("\t".to_string()),
        KeyCode::Esc => Key::Text("\x1b".to_string()),
        code => Key::Text(escape_sequence(code)?.to_string()),
    };

    Some(Translated::Key(Keystroke::new(key, modifiers)))
}

/// The xterm sequence a non-character key sends.
fn escape_sequence(code: KeyCode) -> Option<&'static str> {
    let seq = match code {
        KeyCode::Up => "\x1b[A",
        KeyCode::Down => "\x1b[B",
        KeyCode::Right => "\x1b[C",
        KeyCode::Left => "\x1b[D",
        KeyCode::Home => "\x1b[H",
        KeyCode::End => "\x1b[F",
        KeyCode::Insert => "\x1b[2~",
        KeyCode::Delete => "\x1b[3~",
        KeyCode::PageUp => "\x1b[5~",
        KeyCode::PageDown => "\x1b[6~",
        _ => return None,
    };
    Some(seq)
}
