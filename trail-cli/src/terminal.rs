//! Line-oriented terminal console.

use std::io::{self, BufRead, Write};

use trail_game::{Console, InputFilter};

/// ANSI erase-display followed by cursor-home.
const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[1;1H";

/// [`Console`] over any buffered reader and writer, normally locked stdin/stdout.
pub struct TerminalConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn clear_screen(&mut self) -> io::Result<()> {
        self.writer.write_all(CLEAR_SEQUENCE.as_bytes())?;
        self.writer.flush()
    }

    fn write_line(&mut self, text: &str, newline: bool) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        if newline {
            writeln!(self.writer)?;
        }
        self.writer.flush()
    }

    fn read_line(&mut self, prompt: &str, filter: InputFilter) -> io::Result<String> {
        writeln!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        // End of input reads as an empty answer.
        if self.reader.read_line(&mut line)? == 0 {
            log::debug!("end of input while answering {prompt:?}");
        }
        Ok(filter.apply(line.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> TerminalConsole<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn read_line_prints_prompt_and_filters_answer() {
        let mut console = console("  $250 for oxen \n");
        let answer = console
            .read_line("How much?", InputFilter::IntegerDigitsOnly)
            .unwrap();
        assert_eq!(answer, "250");
        assert_eq!(String::from_utf8(console.into_writer()).unwrap(), "How much?\n");
    }

    #[test]
    fn exhausted_input_reads_as_empty() {
        let mut console = console("");
        assert_eq!(
            console.read_line("Name?", InputFilter::PlainText).unwrap(),
            ""
        );
        assert!(console.confirm("Do you need instructions?", true).unwrap());
    }

    #[test]
    fn write_line_honours_newline_flag() {
        let mut console = console("");
        console.write_line("April 26", true).unwrap();
        console.write_line("1", false).unwrap();
        console.write_line("", true).unwrap();
        assert_eq!(
            String::from_utf8(console.into_writer()).unwrap(),
            "April 26\n1\n"
        );
    }

    #[test]
    fn clear_screen_emits_ansi_sequence() {
        let mut console = console("");
        console.clear_screen().unwrap();
        assert_eq!(
            String::from_utf8(console.into_writer()).unwrap(),
            CLEAR_SEQUENCE
        );
    }

    #[test]
    fn windows_line_endings_are_trimmed() {
        let mut console = console("N\r\n");
        assert!(!console.confirm("Do you need instructions?", true).unwrap());
    }
}
