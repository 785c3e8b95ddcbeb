//! Accumulating text emitter for generated Go source.

use std::{
    fmt,
    io::{self, BufWriter, Write},
};

use super::{CodeFragment, Renderable};

/// Go indentation: one tab per level.
const INDENT: &str = "\t";

/// Append-only writer for generated source.
///
/// Writes are buffered and never fail eagerly: every I/O error is recorded
/// and reported together by [`Emitter::flush`], so section generators can
/// emit without threading `Result` through every line.
///
/// # Example
///
/// ```
/// use enumerator_codegen::builder::Emitter;
///
/// let mut emitter = Emitter::in_memory();
/// emitter
///     .line("func main() {")
///     .indent()
///     .line("println(\"hello\")")
///     .dedent()
///     .line("}");
/// let bytes = emitter.flush().unwrap();
///
/// assert_eq!(bytes, b"func main() {\n\tprintln(\"hello\")\n}\n");
/// ```
pub struct Emitter<W: Write> {
    writer: BufWriter<W>,
    indent_level: usize,
    errors: Vec<io::Error>,
}

impl Emitter<Vec<u8>> {
    /// Create an emitter collecting into memory.
    pub fn in_memory() -> Self {
        Self::new(Vec::new())
    }
}

impl<W: Write> Emitter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            indent_level: 0,
            errors: Vec::new(),
        }
    }

    /// Add a line with current indentation.
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.write_str(s);
        self.write_str("\n");
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(&mut self) -> &mut Self {
        self.write_str("\n");
        self
    }

    /// Add raw text without indentation or newline.
    pub fn raw(&mut self, s: &str) -> &mut Self {
        self.write_str(s);
        self
    }

    /// Add a `//` comment line; empty text yields a bare `//`.
    pub fn comment(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            self.line("//")
        } else {
            self.line(&format!("// {}", text))
        }
    }

    /// Increase indentation level.
    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.line(&s);
            }
            CodeFragment::Blank => {
                self.blank();
            }
            CodeFragment::Comment(s) => {
                self.comment(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.line(&header);
                self.indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.dedent();
                if let Some(c) = close {
                    self.line(&c);
                }
            }
        }
    }

    /// Flush buffered output and hand back the underlying writer.
    ///
    /// Fails with every error recorded since creation, if there was any.
    pub fn flush(self) -> Result<W, EmitError> {
        let mut errors = self.errors;
        match self.writer.into_inner() {
            Ok(writer) if errors.is_empty() => Ok(writer),
            Ok(_) => Err(EmitError { errors }),
            Err(e) => {
                errors.push(e.into_error());
                Err(EmitError { errors })
            }
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.write_str(INDENT);
        }
    }

    fn write_str(&mut self, s: &str) {
        if let Err(e) = self.writer.write_all(s.as_bytes()) {
            self.errors.push(e);
        }
    }
}

/// Every write error collected by an [`Emitter`].
#[derive(Debug)]
pub struct EmitError {
    errors: Vec<io::Error>,
}

impl EmitError {
    /// The individual errors, in the order they occurred.
    pub fn errors(&self) -> &[io::Error] {
        &self.errors
    }
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("\n"))
    }
}

impl std::error::Error for EmitError {}
