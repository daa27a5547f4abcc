//! Raw-mode terminal input for the answer window

use super::clock::{AnswerInput, KeyInput};
use crossterm::{
    cursor::MoveToColumn,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Map a terminal key event onto answer entry
///
/// Ctrl-C interrupts. Other Ctrl and Alt chords are ignored rather than typed.
fn key_input(key: KeyEvent) -> Option<KeyInput> {
    // Only process key press events (fixes Windows double-input bug)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let chord = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyInput::Interrupt)
        }
        KeyCode::Char(_) if chord => None,
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Enter => Some(KeyInput::Submit),
        _ => None,
    }
}

/// Reads keys straight from the terminal while the clock runs
///
/// Raw mode is on only between `begin` and `end`, and is switched off on drop
/// if a window is still open.
pub struct TerminalInput {
    stdout: Stdout,
    prompt: String,
    raw: bool,
}

impl TerminalInput {
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            stdout: io::stdout(),
            prompt: prompt.into(),
            raw: false,
        }
    }
}

impl AnswerInput for TerminalInput {
    fn begin(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        Ok(())
    }

    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        Ok(key_input(key))
    }

    fn redraw(&mut self, typed: &str, remaining: Duration) -> io::Result<()> {
        let secs = remaining.as_secs_f64().ceil() as u64;
        queue!(
            self.stdout,
            Clear(ClearType::CurrentLine),
            MoveToColumn(0),
            Print(format!("[{secs:>2}s] {}{typed}", self.prompt))
        )?;
        self.stdout.flush()
    }

    fn discard_pending(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }
        Ok(())
    }

    fn end(&mut self) -> io::Result<()> {
        if self.raw {
            self.raw = false;
            terminal::disable_raw_mode()?;
            writeln!(self.stdout)?;
        }
        Ok(())
    }
}

impl Drop for TerminalInput {
    fn drop(&mut self) {
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}
