//! Keystroke input handling using crossterm
//!
//! Features:
//! - Non-blocking keystroke capture
//! - Key-to-intent mapping for both drills
//! - Ctrl+C / Escape graceful exit

use crate::numbers::range::{MAX_SUPPORTED, SLIDER_SCALE};
use crate::numbers::Operator;
use crate::session::{Intent, ShoppingIntent};
use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Result as IoResult;
use std::time::Duration;

/// What a key press asks the numbers drill to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumbersAction {
    Session(Intent),
    Listen,
    Quit,
}

/// What a key press asks the shopping drill to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShoppingAction {
    Session(ShoppingIntent),
    Listen,
    ListenEnglish,
    Quit,
}

/// Handles user input from terminal
pub struct InputHandler {
    /// Timeout for poll operations (milliseconds)
    poll_timeout: Duration,
}

impl InputHandler {
    /// Create new input handler with default timeout (50ms for responsive input)
    pub fn new() -> Self {
        InputHandler {
            poll_timeout: Duration::from_millis(50),
        }
    }

    /// Poll for keystroke with timeout (non-blocking)
    /// Returns Some(KeyEvent) if key pressed, None if timeout
    pub fn read_key(&self) -> IoResult<Option<KeyEvent>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                // Windows reports releases too; only presses count
                event::Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                    Ok(Some(key_event))
                }
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    /// Check if key event is an exit signal (Ctrl+C or Escape)
    pub fn is_exit(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Esc => true,
            _ => false,
        }
    }

    /// Map a key on the numbers drill; `configuring` selects the Enter meaning
    pub fn numbers_action(key: &KeyEvent, configuring: bool) -> Option<NumbersAction> {
        if Self::is_exit(key) {
            return Some(NumbersAction::Quit);
        }
        let intent = match key.code {
            KeyCode::Enter if configuring => Intent::Start,
            KeyCode::Enter => Intent::GenerateNew,
            KeyCode::Char(' ') => Intent::ToggleAnswer,
            KeyCode::Char('l') => return Some(NumbersAction::Listen),
            KeyCode::Home => Intent::SetMin(SLIDER_SCALE[0]),
            KeyCode::End => Intent::SetMax(MAX_SUPPORTED),
            KeyCode::Char('[') => Intent::StepMin(-1),
            KeyCode::Char(']') => Intent::StepMin(1),
            KeyCode::Char('{') => Intent::StepMax(-1),
            KeyCode::Char('}') => Intent::StepMax(1),
            KeyCode::Char('w') => Intent::ToggleConnector,
            KeyCode::Char('s') => Intent::OpenSettings,
            KeyCode::Char(c) => Intent::ToggleOperator(Operator::from_key(c)?),
            _ => return None,
        };
        Some(NumbersAction::Session(intent))
    }

    /// Map a key on the shopping drill
    pub fn shopping_action(key: &KeyEvent) -> Option<ShoppingAction> {
        if Self::is_exit(key) {
            return Some(ShoppingAction::Quit);
        }
        let intent = match key.code {
            KeyCode::Enter => ShoppingIntent::Next,
            KeyCode::Char('l') => return Some(ShoppingAction::Listen),
            KeyCode::Char('e') => return Some(ShoppingAction::ListenEnglish),
            KeyCode::Char('q') => ShoppingIntent::NextQuantity,
            KeyCode::Char('b') => ShoppingIntent::ChooseDifferent,
            KeyCode::Char(c @ '1'..='9') => ShoppingIntent::Select(c as usize - '1' as usize),
            _ => return None,
        };
        Some(ShoppingAction::Session(intent))
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
