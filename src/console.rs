//! Line-oriented text channel between the game and the person playing it.

use std::cell::RefCell;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use tracing::{debug, instrument};

/// Buffered input plus output, usually stdin and stdout.
///
/// Reading past end-of-file marks the console closed so loops waiting on
/// input can stop instead of prompting forever.
pub struct Console {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
    closed: bool,
}

impl Console {
    /// Creates a console over arbitrary reader and writer.
    pub fn new(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
            closed: false,
        }
    }

    /// Creates a console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Writes `text` as-is.
    pub fn write(&mut self, text: impl Display) -> io::Result<()> {
        write!(self.output, "{}", text)
    }

    /// Writes `text`, then reads one line with its terminator removed.
    ///
    /// Returns `None` once input is exhausted.
    #[instrument(skip(self))]
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            debug!("Input closed");
            self.closed = true;
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and are rejected like any other bad reply.
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Whether input has reached end-of-file.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Flushes pending output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

/// Shared in-memory output sink.
///
/// Clones write into the same buffer, so one handle can go into a
/// [`Console`] while another reads back what was printed.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    buffer: Rc<RefCell<Vec<u8>>>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.borrow()).into_owned()
    }
}

impl Write for Transcript {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_strips_line_endings() {
        let transcript = Transcript::new();
        let mut console = Console::new(Cursor::new("first\r\nsecond\n"), transcript.clone());

        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(transcript.contents(), "> > ");
    }

    #[test]
    fn test_prompt_keeps_surrounding_spaces() {
        let mut console = Console::new(Cursor::new(" 1 \n"), Transcript::new());
        assert_eq!(console.prompt("").unwrap().as_deref(), Some(" 1 "));
    }

    #[test]
    fn test_prompt_reports_eof() {
        let mut console = Console::new(Cursor::new(""), Transcript::new());
        assert!(!console.is_closed());
        assert_eq!(console.prompt("> ").unwrap(), None);
        assert!(console.is_closed());
    }

    #[test]
    fn test_invalid_utf8_is_read_lossily() {
        let mut console = Console::new(Cursor::new(&b"\xff\nq\n"[..]), Transcript::new());
        assert_eq!(console.prompt("").unwrap().as_deref(), Some("\u{FFFD}"));
        assert_eq!(console.prompt("").unwrap().as_deref(), Some("q"));
        assert!(!console.is_closed());
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut console = Console::new(Cursor::new("q"), Transcript::new());
        assert_eq!(console.prompt("").unwrap().as_deref(), Some("q"));
    }
}
