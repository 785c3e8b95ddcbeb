//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Render a headline result.
    fn success(&mut self, text: &str);

    /// Render an indented key-value pair.
    fn key_value_indented(&mut self, key: &str, value: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render a progress or summary message that must stay off stdout.
    fn status(&mut self, msg: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn success(&mut self, text: &str) {
        println!("✓ {}", text);
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        println!("  {}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("    - {}", text);
    }

    fn status(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Records rendered lines for assertions.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingOutput {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn success(&mut self, text: &str) {
        self.stdout.push(format!("✓ {}", text));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.stdout.push(format!("  {}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.stdout.push(format!("    - {}", text));
    }

    fn status(&mut self, msg: &str) {
        self.stderr.push(msg.to_string());
    }

    fn newline(&mut self) {
        self.stdout.push(String::new());
    }
}
