//! Confirmation gate: one keypress decides whether the chosen platform launches.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::error::GateError;

/// Answer to "launch with this platform?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationResult {
    Confirmed,
    Cancelled,
    ReselectRequested,
}

impl ConfirmationResult {
    /// Short echo printed after the prompt line.
    pub fn echo(&self) -> &'static str {
        match self {
            ConfirmationResult::Confirmed => "Y",
            ConfirmationResult::Cancelled => "n",
            ConfirmationResult::ReselectRequested => "Esc",
        }
    }
}

/// What a single key event means at the prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyDecision {
    Answer(ConfirmationResult),
    Interrupt,
    Ignore,
}

/// Map a key event onto the gate's answers. Anything unrecognised is ignored
/// and the gate keeps waiting.
pub fn classify_key(key: &KeyEvent) -> KeyDecision {
    if key.kind != KeyEventKind::Press {
        return KeyDecision::Ignore;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => KeyDecision::Interrupt,
            _ => KeyDecision::Ignore,
        };
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
            KeyDecision::Answer(ConfirmationResult::Confirmed)
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            KeyDecision::Answer(ConfirmationResult::Cancelled)
        }
        KeyCode::Esc => KeyDecision::Answer(ConfirmationResult::ReselectRequested),
        _ => KeyDecision::Ignore,
    }
}

/// Keeps the terminal in raw mode for as long as it is alive.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Block until a decisive key arrives on the terminal.
///
/// Ctrl-C surfaces as [`GateError::UserAborted`]; raw mode is restored on
/// every exit path.
pub fn read_decision() -> Result<ConfirmationResult, GateError> {
    let _raw = RawModeGuard::enable()?;

    loop {
        if let Event::Key(key) = event::read()? {
            match classify_key(&key) {
                KeyDecision::Answer(answer) => return Ok(answer),
                KeyDecision::Interrupt => return Err(GateError::UserAborted),
                KeyDecision::Ignore => {}
            }
        }
    }
}
