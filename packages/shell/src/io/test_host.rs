//! Test host implementation for in-memory I/O testing.
//!
//! Keystrokes and signals are queued in one ordered stream and consumed one
//! per `wait_for_event()`. Everything the core draws is recorded for later
//! inspection. Once the queue runs dry the host reports `Signal::Close`, so
//! a run always terminates.

use std::collections::VecDeque;

use super::{
    IoError, IoHost, Keystroke, Output, OutputStyle, PromptConfig, Signal, ViewportSize,
};

#[derive(Debug)]
enum Event {
    Key(Keystroke),
    Signal(Signal),
}

/// Test host with in-memory I/O buffers.
#[derive(Debug, Default)]
pub struct TestHost {
    events: VecDeque<Event>,
    pending_key: Option<Keystroke>,
    pending_signal: Option<Signal>,
    output_buffer: Vec<Output>,
    /// Every prompt in the order drawn.
    prompts: Vec<PromptConfig>,
    /// Output indices at which `clear()` was called.
    clears: Vec<usize>,
    viewport: Option<ViewportSize>,
    closed: bool,
    flush_count: usize,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_key(&mut self, key: Keystroke) {
        self.events.push_back(Event::Key(key));
    }

    /// Queue the keystrokes for typing `line` followed by enter.
    pub fn queue_line(&mut self, line: &str) {
        for key in Keystroke::typed(line) {
            self.queue_key(key);
        }
    }

    pub fn queue_lines<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) {
        for line in lines {
            self.queue_line(line);
        }
    }

    pub fn queue_signal(&mut self, signal: Signal) {
        self.events.push_back(Event::Signal(signal));
    }

    pub fn output(&self) -> &[Output] {
        &self.output_buffer
    }

    /// All output text, concatenated.
    pub fn output_text(&self) -> String {
        self.output_buffer.iter().map(|o| o.text.as_str()).collect()
    }

    pub fn output_with_style(&self, style: OutputStyle) -> Vec<&str> {
        self.output_buffer
            .iter()
            .filter(|o| o.style == style)
            .map(|o| o.text.as_str())
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.output_with_style(OutputStyle::Error)
    }

    pub fn prompts(&self) -> &[PromptConfig] {
        &self.prompts
    }

    pub fn last_prompt(&self) -> Option<&PromptConfig> {
        self.prompts.last()
    }

    /// Output written since the last `clear()`.
    pub fn visible_output(&self) -> &[Output] {
        let start = self.clears.last().copied().unwrap_or(0);
        &self.output_buffer[start..]
    }

    pub fn clear_count(&self) -> usize {
        self.clears.len()
    }

    pub fn viewport(&self) -> Option<ViewportSize> {
        self.viewport
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn flush_count(&self) -> usize {
        self.flush_count
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }
}

impl IoHost for TestHost {
    fn wait_for_event(&mut self) -> Result<(), IoError> {
        match self.events.pop_front() {
            Some(Event::Key(key)) => self.pending_key = Some(key),
            Some(Event::Signal(signal)) => self.pending_signal = Some(signal),
            None => self.pending_signal = Some(Signal::Close),
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
        self.output_buffer.push(output);
        Ok(())
    }

    fn write_prompt(&mut self, config: PromptConfig) -> Result<(), IoError> {
        self.prompts.push(config);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), IoError> {
        self.clears.push(self.output_buffer.len());
        Ok(())
    }

    fn fit_viewport(&mut self, size: ViewportSize) -> Result<(), IoError> {
        self.viewport = Some(size);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), IoError> {
        self.flush_count += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), IoError> {
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_empty_host() {
        let host = TestHost::new();
        assert!(!host.has_pending_events());
        assert!(host.output().is_empty());
        assert!(host.last_prompt().is_none());
        assert_eq!(host.flush_count(), 0);
        assert!(!host.is_closed());
    }

    #[test]
    fn events_come_back_in_order() {
        let mut host = TestHost::new();
        host.queue_key(Keystroke::text("a"));
        host.queue_signal(Signal::Resize(ViewportSize { cols: 80, rows: 24 }));
        host.queue_key(Keystroke::enter());

        host.wait_for_event().unwrap();
        assert_eq!(host.read_signal().unwrap(), None);
        assert_eq!(host.read_key().unwrap(), Some(Keystroke::text("a")));

        host.wait_for_event().unwrap();
        assert!(matches!(host.read_signal().unwrap(), Some(Signal::Resize(_))));
        assert_eq!(host.read_key().unwrap(), None);

        host.wait_for_event().unwrap();
        assert_eq!(host.read_key().unwrap(), Some(Keystroke::enter()));
    }

    #[test]
    fn exhausted_host_closes() {
        let mut host = TestHost::new();
        host.wait_for_event().unwrap();
        assert_eq!(host.read_signal().unwrap(), Some(Signal::Close));
    }

    #[test]
    fn queue_line_types_then_submits() {
        let mut host = TestHost::new();
        host.queue_line("ls");
        let mut keys = Vec::new();
        while host.has_pending_events() {
            host.wait_for_event().unwrap();
            keys.extend(host.read_key().unwrap());
        }
        assert_eq!(
            keys,
            vec![Keystroke::text("l"), Keystroke::text("s"), Keystroke::enter()]
        );
    }

    #[test]
    fn visible_output_starts_after_clear() {
        let mut host = TestHost::new();
        host.write_output(Output::normal("old")).unwrap();
        host.clear().unwrap();
        host.write_output(Output::normal("new")).unwrap();

        assert_eq!(host.output_text(), "oldnew");
        assert_eq!(host.visible_output(), &[Output::normal("new")]);
        assert_eq!(host.clear_count(), 1);
    }

    #[test]
    fn errors_returns_error_outputs() {
        let mut host = TestHost::new();
        host.write_output(Output::normal("ok")).unwrap();
        host.write_output(Output::error("error1")).unwrap();
        host.write_output(Output::error("error2")).unwrap();
        assert_eq!(host.errors(), vec!["error1", "error2"]);
    }

    #[test]
    fn records_viewport_and_close() {
        let mut host = TestHost::new();
        host.fit_viewport(ViewportSize { cols: 120, rows: 40 }).unwrap();
        host.close().unwrap();
        assert_eq!(host.viewport(), Some(ViewportSize { cols: 120, rows: 40 }));
        assert!(host.is_closed());
    }

    #[test]
    fn flush_increments_counter() {
        let mut host = TestHost::new();
        host.flush().unwrap();
        host.flush().unwrap();
        assert_eq!(host.flush_count(), 2);
    }
}
