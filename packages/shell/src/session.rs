//! Per-session interpreter state.

/// Where the user is in the tree and what they have typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current_path: Vec<String>,
    input_buffer: String,
}

impl Session {
    /// A session at the root with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_path(&self) -> &[String] {
        &self.current_path
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn at_root(&self) -> bool {
        self.current_path.is_empty()
    }

    /// The path as shown in the prompt: `/` followed by the segments.
    pub fn display_path(&self) -> String {
        format!("/{}", self.current_path.join("/"))
    }

    pub(crate) fn enter(&mut self, name: &str) {
        self.current_path.push(name.to_string());
    }

    pub(crate) fn leave(&mut self) -> Option<String> {
        self.current_path.pop()
    }

    pub(crate) fn push_input(&mut self, text: &str) {
        self.input_buffer.push_str(text);
    }

    pub(crate) fn pop_input(&mut self) -> Option<char> {
        self.input_buffer.pop()
    }

    pub(crate) fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input_buffer)
    }
}
