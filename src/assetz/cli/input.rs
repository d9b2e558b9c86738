use assetz::error::{AssetzError, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{BufRead, StdinLock, Stdout, Write};

/// One line of console input per prompt.
pub trait LineInput {
    /// Shows `prompt` and reads a line without its terminator. `None` means the
    /// user is done (end of input or Ctrl-C).
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Line editor with history, for interactive terminals.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(input_error)?;
        Ok(Self { editor })
    }
}

impl LineInput for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor
                        .add_history_entry(line.as_str())
                        .map_err(input_error)?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(input_error(err)),
        }
    }
}

fn input_error(err: ReadlineError) -> AssetzError {
    AssetzError::Input(err.to_string())
}

/// Plain buffered input, for piped stdin and tests.
pub struct ReaderInput<R: BufRead, W: Write> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> ReaderInput<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl ReaderInput<StdinLock<'static>, Stdout> {
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> LineInput for ReaderInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_without_terminators() {
        let mut input = ReaderInput::new(Cursor::new("one\r\ntwo\n"), Vec::new());
        assert_eq!(input.read_line("> ").unwrap().as_deref(), Some("one"));
        assert_eq!(input.read_line("> ").unwrap().as_deref(), Some("two"));
        assert_eq!(input.read_line("> ").unwrap(), None);
    }

    #[test]
    fn keeps_inner_whitespace_and_blank_lines() {
        let mut input = ReaderInput::new(Cursor::new("  a b \n\n"), Vec::new());
        assert_eq!(input.read_line("").unwrap().as_deref(), Some("  a b "));
        assert_eq!(input.read_line("").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let mut input = ReaderInput::new(Cursor::new("0"), Vec::new());
        assert_eq!(input.read_line("").unwrap().as_deref(), Some("0"));
    }

    #[test]
    fn writes_prompt_before_reading() {
        let mut input = ReaderInput::new(Cursor::new("x\n"), Vec::new());
        input.read_line("Name: ").unwrap();
        assert_eq!(input.prompt_out, b"Name: ");
    }
}
