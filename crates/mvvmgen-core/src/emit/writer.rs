const INDENT: &str = "    ";
const NEWLINE: char = '\n';

///
/// CodeWriter
///
/// Line-oriented text sink with scoped indentation. Indentation is written
/// lazily at the first write of each line; blank lines carry none.
///

#[derive(Clone, Debug)]
pub struct CodeWriter {
    buf: String,
    indent: usize,
    at_line_start: bool,
}

impl CodeWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: String::new(),
            indent: 0,
            at_line_start: true,
        }
    }

    #[must_use]
    pub const fn indent_level(&self) -> usize {
        self.indent
    }

    pub const fn indent(&mut self) {
        self.indent += 1;
    }

    pub const fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Append to the current line.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            for _ in 0..self.indent {
                self.buf.push_str(INDENT);
            }
            self.at_line_start = false;
        }
        self.buf.push_str(text);
    }

    /// Append and terminate the current line.
    pub fn write_line(&mut self, text: &str) {
        self.write(text);
        self.buf.push(NEWLINE);
        self.at_line_start = true;
    }

    /// A line `extra` levels deeper than the current indentation.
    pub fn write_line_at(&mut self, extra: usize, text: &str) {
        self.indent += extra;
        self.write_line(text);
        self.indent -= extra;
    }

    /// Terminate the current line without indenting it; on a fresh line
    /// this writes an empty line.
    pub fn blank_line(&mut self) {
        self.buf.push(NEWLINE);
        self.at_line_start = true;
    }

    /// Write `{` and indent.
    pub fn open_block(&mut self) {
        self.write_line("{");
        self.indent();
    }

    /// Dedent and write `}`.
    pub fn close_block(&mut self) {
        self.dedent();
        self.write_line("}");
    }

    /// `header` on its own line followed by an indented block.
    pub fn block(&mut self, header: &str, body: impl FnOnce(&mut Self)) {
        self.write_line(header);
        self.open_block();
        body(self);
        self.close_block();
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}
