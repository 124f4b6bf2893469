//! Where interactive answers come from.

use std::io::{BufRead, Write};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::error::{Error, Result};
use crate::terminal::{flush, reset_terminal};

/// One answer per prompt.
pub trait LineSource {
    /// Show `prompt` and return the user's line without its terminator.
    ///
    /// End of input is `Error::InputClosed`; an explicit cancel is `Error::Cancelled`.
    fn read_answer(&mut self, prompt: &str) -> Result<String>;
}

/// Plain buffered reader, used when stdin is not a terminal.
pub struct LineReader<R, W> {
    input: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> LineReader<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineSource for LineReader<R, W> {
    fn read_answer(&mut self, prompt: &str) -> Result<String> {
        write!(self.prompt_out, "{}: ", prompt)?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

/// Raw-mode line editor on the controlling terminal.
pub struct TerminalInput;

impl LineSource for TerminalInput {
    fn read_answer(&mut self, prompt: &str) -> Result<String> {
        match get_editable_input(prompt, "") {
            Ok(Some(line)) => Ok(line),
            Ok(None) => Err(Error::Cancelled),
            Err(e) => {
                log::debug!("raw mode unavailable ({e}), falling back to line input");
                let stdin = std::io::stdin();
                LineReader::new(stdin.lock(), std::io::stdout()).read_answer(prompt)
            }
        }
    }
}

/// Holds the terminal in raw mode for one edited line. Dropping it leaves
/// raw mode and moves to the next line, on every exit path.
struct RawLine;

impl RawLine {
    fn start(prompt: &str, initial_value: &str) -> std::io::Result<Self> {
        enable_raw_mode()?;
        print!("{}: {}", prompt, initial_value);
        flush();
        Ok(Self)
    }
}

impl Drop for RawLine {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        println!();
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Edit,
    Submit,
    Cancel,
    Interrupt,
}

/// Line contents and cursor, updated one key at a time.
struct LineEditor {
    chars: Vec<char>,
    cursor: usize,
}

impl LineEditor {
    fn new(initial_value: &str) -> Self {
        let chars: Vec<char> = initial_value.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    fn apply(&mut self, key: KeyEvent) -> Step {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Step::Interrupt,
            KeyCode::Char('q') if ctrl => return Step::Cancel,
            KeyCode::Esc => return Step::Cancel,
            KeyCode::Enter => return Step::Submit,
            KeyCode::Char('u') if ctrl => {
                self.chars.clear();
                self.cursor = 0;
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.chars.remove(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.chars.len() => {
                self.chars.remove(self.cursor);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            KeyCode::Char(c) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Step::Edit
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }
}

/// Edit a single line with cursor movement. `Ok(None)` when cancelled with Esc or Ctrl+Q.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> std::io::Result<Option<String>> {
    let mut editor = LineEditor::new(initial_value);
    let mut drawn_len = editor.chars.len();

    let line = RawLine::start(prompt, initial_value)?;

    loop {
        let key_event = match read()? {
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => key_event,
            _ => continue,
        };

        match editor.apply(key_event) {
            Step::Edit => {}
            Step::Submit => break,
            Step::Cancel => return Ok(None),
            Step::Interrupt => {
                // process::exit skips destructors, so restore the terminal first
                drop(line);
                reset_terminal();
                std::process::exit(130);
            }
        }

        print!("\r{}: {}", prompt, " ".repeat(drawn_len + 1));
        print!("\r{}: {}", prompt, editor.text());
        // 1-based column just after the prompt and cursor
        print!("\x1b[{}G", prompt.chars().count() + 3 + editor.cursor);
        flush();
        drawn_len = editor.chars.len();
    }

    Ok(Some(editor.text()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_lines_and_writes_prompts() {
        let mut out = Vec::new();
        let mut reader = LineReader::new(Cursor::new("12\r\ny\n"), &mut out);
        assert_eq!(reader.read_answer("Password length").unwrap(), "12");
        assert_eq!(reader.read_answer("Use digits? (y/n)").unwrap(), "y");
        assert!(matches!(reader.read_answer("again"), Err(Error::InputClosed)));
        drop(reader);

        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown, "Password length: Use digits? (y/n): again: ");
    }

    #[test]
    fn blank_line_is_an_answer() {
        let mut reader = LineReader::new(Cursor::new("\n"), std::io::sink());
        assert_eq!(reader.read_answer("x").unwrap(), "");
    }

    fn typed(editor: &mut LineEditor, keys: &[KeyCode]) -> Step {
        let mut step = Step::Edit;
        for &code in keys {
            step = editor.apply(KeyEvent::new(code, KeyModifiers::NONE));
        }
        step
    }

    #[test]
    fn editing_keys_move_the_cursor() {
        let mut editor = LineEditor::new("12");
        let step = typed(
            &mut editor,
            &[KeyCode::Home, KeyCode::Char('-'), KeyCode::End, KeyCode::Backspace, KeyCode::Char('8')],
        );
        assert_eq!(step, Step::Edit);
        assert_eq!(editor.text(), "-18");
        assert_eq!(editor.cursor, 3);

        typed(&mut editor, &[KeyCode::Home, KeyCode::Delete, KeyCode::Left, KeyCode::Backspace]);
        assert_eq!(editor.text(), "18");
        assert_eq!(editor.cursor, 0);
    }

    #[test]
    fn control_keys_end_the_line() {
        let mut editor = LineEditor::new("y");
        assert_eq!(typed(&mut editor, &[KeyCode::Enter]), Step::Submit);
        assert_eq!(typed(&mut editor, &[KeyCode::Esc]), Step::Cancel);

        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(editor.apply(ctrl('q')), Step::Cancel);
        assert_eq!(editor.apply(ctrl('c')), Step::Interrupt);
        assert_eq!(editor.apply(ctrl('u')), Step::Edit);
        assert_eq!(editor.text(), "");
    }
}
