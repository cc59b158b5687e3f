//! Indentation-aware text sink that all rendering writes through.

/// Indentation unit for emitted source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character (gofmt convention).
    Tab,
}

impl Indent {
    /// Tab indentation, the Go default.
    pub const GO: Self = Self::Tab;

    fn write(&self, buffer: &mut String) {
        match self {
            Self::Tab => buffer.push('\t'),
            Self::Spaces(n) => {
                for _ in 0..*n {
                    buffer.push(' ');
                }
            }
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::GO
    }
}

/// Stateful text sink with an indent level.
///
/// Indentation is injected at the start of a line only; successive
/// [`print`](Emitter::print) calls compose fragments on one logical
/// line. The indent level never goes below zero, but balancing
/// `indent(1)` / `indent(-1)` pairs is the caller's contract.
///
/// # Example
///
/// ```
/// use gogen_model::Emitter;
///
/// let mut out = Emitter::go();
/// out.println("struct {");
/// out.indent(1);
/// out.println("Name string");
/// out.indent(-1);
/// out.println("}");
///
/// assert_eq!(out.finish(), "struct {\n\tName string\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct Emitter {
    indent: Indent,
    level: usize,
    at_line_start: bool,
    buffer: String,
}

impl Emitter {
    /// Create an emitter with the given indentation unit.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            level: 0,
            at_line_start: true,
            buffer: String::new(),
        }
    }

    /// Create an emitter with tab indentation (Go default).
    pub fn go() -> Self {
        Self::new(Indent::GO)
    }

    /// Append text at the cursor, no trailing newline.
    pub fn print(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            for _ in 0..self.level {
                self.indent.write(&mut self.buffer);
            }
            self.at_line_start = false;
        }
        self.buffer.push_str(text);
    }

    /// Append text followed by a newline.
    pub fn println(&mut self, text: &str) {
        self.print(text);
        self.newline();
    }

    /// Append a bare newline.
    pub fn newline(&mut self) {
        self.buffer.push('\n');
        self.at_line_start = true;
    }

    /// Append non-empty text as `//` line comments, one per input line.
    ///
    /// Empty text emits nothing at all.
    pub fn comment(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        for line in text.lines() {
            if line.is_empty() {
                self.println("//");
            } else {
                self.print("// ");
                self.println(line);
            }
        }
    }

    /// Adjust the indent level by `delta`. The level saturates at zero.
    pub fn indent(&mut self, delta: i32) {
        if delta >= 0 {
            self.level += delta as usize;
        } else {
            self.level = self.level.saturating_sub(delta.unsigned_abs() as usize);
        }
    }

    /// Current indent level.
    pub fn current_indent(&self) -> usize {
        self.level
    }

    /// Borrow the accumulated text.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the emitter and return the accumulated text.
    pub fn finish(self) -> String {
        self.buffer
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::go()
    }
}
