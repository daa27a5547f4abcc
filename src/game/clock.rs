//! Timed answer collection
//!
//! The player gets one chance to type an answer before the deadline. Keys are
//! polled with a timeout that never reaches past the deadline, so the read and
//! the clock race inside a single loop: when `collect_answer` returns, no timer
//! is left running and no half-typed line can turn up later.

use std::io;
use std::time::{Duration, Instant};

/// Longest wait between countdown redraws
pub const TICK: Duration = Duration::from_secs(1);

/// One key event relevant to answer entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Backspace,
    Submit,
    Interrupt,
}

/// Source of key presses for the answer window
pub trait AnswerInput {
    /// Called once when the answer window opens
    fn begin(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Wait up to `timeout` for the next key
    ///
    /// `Ok(None)` means nothing relevant arrived in time.
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyInput>>;

    /// Show the line typed so far and the time left
    fn redraw(&mut self, _typed: &str, _remaining: Duration) -> io::Result<()> {
        Ok(())
    }

    /// Drop keys that arrived after the window closed
    fn discard_pending(&mut self) -> io::Result<()>;

    /// Called once when the answer window closes, however it closes
    fn end(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Collect one typed answer before `deadline` elapses
///
/// Returns `Ok(Some(text))` when the player submits in time and `Ok(None)` on
/// timeout, in which case anything half-typed is thrown away.
///
/// # Errors
///
/// Returns the input's I/O errors, and `ErrorKind::Interrupted` if the player
/// presses Ctrl-C during the window.
pub fn collect_answer<I>(input: &mut I, deadline: Duration) -> io::Result<Option<String>>
where
    I: AnswerInput + ?Sized,
{
    input.begin()?;
    let result = race(input, deadline);
    let ended = input.end();
    let answer = result?;
    ended?;
    Ok(answer)
}

fn race<I>(input: &mut I, deadline: Duration) -> io::Result<Option<String>>
where
    I: AnswerInput + ?Sized,
{
    let started = Instant::now();
    // A deadline past the end of the clock never expires
    let expires = started.checked_add(deadline);
    let time_left = || {
        expires.map_or(Duration::MAX, |at| {
            at.saturating_duration_since(Instant::now())
        })
    };
    let mut typed = String::new();

    input.redraw(&typed, deadline)?;

    loop {
        let remaining = time_left();
        if remaining.is_zero() {
            input.discard_pending()?;
            tracing::debug!(discarded = typed.len(), "answer deadline elapsed");
            return Ok(None);
        }

        match input.poll_key(remaining.min(TICK))? {
            None => {}
            Some(KeyInput::Char(c)) => typed.push(c),
            Some(KeyInput::Backspace) => {
                typed.pop();
            }
            Some(KeyInput::Submit) => {
                tracing::debug!(
                    elapsed_ms = started.elapsed().as_millis(),
                    "answer submitted"
                );
                return Ok(Some(typed));
            }
            Some(KeyInput::Interrupt) => {
                return Err(io::Error::new(
                    io::ErrorKind::Interrupted,
                    "answer entry interrupted",
                ));
            }
        }

        input.redraw(&typed, time_left())?;
    }
}
