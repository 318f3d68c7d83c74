//! Output buffer that tracks the current indentation prefix.

/// One indentation level.
const INDENT: &str = "  ";

/// Append-only text buffer paired with an indentation prefix.
///
/// The prefix grows by concatenating two spaces per level and shrinks by
/// truncating them again, so a line written at depth `n` is preceded by
/// exactly `2 * n` spaces.
///
/// # Example
///
/// ```
/// use viewgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::default();
/// builder.push_line("<p>");
/// builder.indented(|b| {
///     b.push_line("hello");
/// });
/// builder.push_line("</p>");
///
/// assert_eq!(builder.build(), "<p>\n  hello\n</p>\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    prefix: String,
    buffer: String,
}

impl CodeBuilder {
    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(&self.prefix);
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add every line of `s`, each with current indentation.
    pub fn push_lines(&mut self, s: &str) -> &mut Self {
        for line in s.lines() {
            self.push_line(line);
        }
        self
    }

    /// Add text with current indentation but no trailing newline.
    pub fn push_unterminated(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(&self.prefix);
        self.buffer.push_str(s);
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.prefix.push_str(INDENT);
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        let len = self.prefix.len().saturating_sub(INDENT.len());
        self.prefix.truncate(len);
        self
    }

    /// Run `f` one indentation level deeper.
    pub fn indented<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_indent();
        f(self);
        self.push_dedent()
    }

    /// Consume the builder and return the generated text.
    pub fn build(self) -> String {
        self.buffer
    }
}
