//! Line-oriented player I/O.

use std::io::{self, BufRead, Write};

use crate::error::QuizError;

/// Where the game prints and reads from.
pub trait Console {
    /// Print one line.
    fn say(&mut self, line: &str) -> Result<(), QuizError>;

    /// Show `prompt` and read one line of input, without the line ending.
    ///
    /// Returns [`QuizError::InputClosed`] once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<String, QuizError>;
}

/// Console over any buffered reader and writer.
///
/// Input that is not valid UTF-8 is decoded lossily, so it reaches the game
/// as an unparseable answer instead of an I/O error.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

/// Console over the process's stdin and stdout.
pub type StdConsole = LineConsole<io::StdinLock<'static>, io::Stdout>;

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The writer, e.g. to inspect what was printed.
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl LineConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn say(&mut self, line: &str) -> Result<(), QuizError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, QuizError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(QuizError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &[u8]) -> LineConsole<Cursor<Vec<u8>>, Vec<u8>> {
        LineConsole::new(Cursor::new(input.to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_strips_line_endings() {
        let mut console = console(b"easy\r\nB\nlast");
        assert_eq!(console.ask("> ").unwrap(), "easy");
        assert_eq!(console.ask("> ").unwrap(), "B");
        assert_eq!(console.ask("> ").unwrap(), "last");
        assert!(matches!(console.ask("> "), Err(QuizError::InputClosed)));
    }

    #[test]
    fn test_invalid_utf8_is_read_as_text() {
        let mut console = console(b"\xff\xfe\nhard\n");
        let garbled = console.ask("> ").unwrap();
        assert!(garbled.contains('\u{FFFD}'));
        assert_eq!(console.ask("> ").unwrap(), "hard");
    }

    #[test]
    fn test_say_and_prompt_reach_output() {
        let mut console = console(b"x\n");
        console.say("Hello").unwrap();
        console.ask("Pick: ").unwrap();
        assert_eq!(console.output().as_slice(), b"Hello\nPick: ");
    }
}
