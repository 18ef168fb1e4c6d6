//! Terminal display and UI rendering
//!
//! Features:
//! - Settings screen with operator toggles and range
//! - Problem display, answer reveal with the Russian sentence
//! - Product shelf and dialogue lines for the shopping drill
//! - Plain-text vocabulary listing

use crate::error::Result;
use crate::numbers::phrase::{numeric_answer, numeric_question, problem_sentence};
use crate::numbers::vocabulary::VocabularySection;
use crate::numbers::Operator;
use crate::session::{SessionState, Settings, ShoppingState};
use crate::shopping::{Speaker, CATALOG};
use crossterm::{
    cursor, execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{self, stdout, Write};

/// Terminal display manager
pub struct Display {
    /// Whether we're using alternate screen
    use_alternate_screen: bool,
}

impl Display {
    /// Create display on the alternate screen in raw mode, leaving the shell
    /// scrollback intact
    pub fn alternate() -> Result<Self> {
        Self::enter(terminal::enable_raw_mode)
    }

    /// Raw mode is switched on only once the display exists, so a failure
    /// there still restores the screen through Drop
    fn enter(enable_raw_mode: impl FnOnce() -> io::Result<()>) -> Result<Self> {
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        let display = Display {
            use_alternate_screen: true,
        };
        enable_raw_mode()?;
        Ok(display)
    }

    /// Clear screen
    pub fn clear(&self) -> Result<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    /// Title line
    pub fn show_title(&self, title: &str) -> Result<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Cyan),
            Print(title),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Settings screen: operator toggles, range and connector
    pub fn show_settings(&self, settings: &Settings) -> Result<()> {
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, 2),
            SetForegroundColor(Color::Magenta),
            Print("Operators: "),
            ResetColor
        )?;
        for op in Operator::ALL {
            let enabled = settings.operators.contains(&op);
            execute!(
                stdout,
                SetForegroundColor(if enabled { Color::Green } else { Color::DarkGrey }),
                Print(format!("[{}] {}  ", op.symbol(), op.phrase())),
                ResetColor
            )?;
        }

        execute!(
            stdout,
            cursor::MoveTo(0, 3),
            SetForegroundColor(Color::Magenta),
            Print("Range: "),
            ResetColor,
            Print(format!(
                "{} - {}",
                settings.range.min(),
                settings.range.max()
            )),
            cursor::MoveTo(0, 4),
            SetForegroundColor(Color::DarkGrey),
            Print(format!(
                "One number (operand or result) will be within {}-{}, others will be ≤ {}",
                settings.range.min(),
                settings.range.max(),
                settings.range.ceiling()
            )),
            ResetColor,
            cursor::MoveTo(0, 5),
            SetForegroundColor(Color::Magenta),
            Print("Answer word: "),
            ResetColor,
            Print(settings.connector.phrase()),
        )?;

        if !settings.can_start() {
            execute!(
                stdout,
                cursor::MoveTo(0, 7),
                SetForegroundColor(Color::Red),
                Print("Select at least one operator to start"),
                ResetColor
            )?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Current problem, with the answer when revealed
    pub fn show_problem(&self, session: &SessionState) -> Result<()> {
        let mut stdout = stdout();
        let settings = &session.settings;

        execute!(
            stdout,
            cursor::MoveTo(0, 2),
            SetForegroundColor(Color::DarkGrey),
            Print(format!(
                "Range: {}-{} | Ops: {}",
                settings.range.min(),
                settings.range.max(),
                settings.operator_summary()
            )),
            ResetColor
        )?;

        let Some(problem) = session.problem else {
            stdout.flush()?;
            return Ok(());
        };

        execute!(
            stdout,
            cursor::MoveTo(0, 4),
            SetForegroundColor(Color::Yellow),
            Print(numeric_question(&problem)),
            ResetColor
        )?;

        if session.answer_shown {
            execute!(
                stdout,
                cursor::MoveTo(0, 6),
                SetForegroundColor(Color::Green),
                Print(numeric_answer(&problem)),
                ResetColor,
                cursor::MoveTo(0, 7),
                Print(problem_sentence(&problem, settings.connector))
            )?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Product shelf with prices and availability
    pub fn show_catalog(&self, state: &ShoppingState) -> Result<()> {
        let mut stdout = stdout();

        for (i, product) in CATALOG.iter().enumerate() {
            execute!(
                stdout,
                cursor::MoveTo(0, 2 + i as u16),
                SetForegroundColor(if product.available {
                    Color::White
                } else {
                    Color::DarkGrey
                }),
                Print(format!(
                    "{}. {} ({}) - {} ₽{}",
                    i + 1,
                    product.name_ru,
                    product.name_en,
                    product.price,
                    if product.available { "" } else { "  [out of stock]" }
                )),
                ResetColor
            )?;
        }

        execute!(
            stdout,
            cursor::MoveTo(0, 2 + CATALOG.len() as u16 + 1),
            SetForegroundColor(Color::Magenta),
            Print("Quantity: "),
            ResetColor,
            Print(state.quantity)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Current dialogue line with speaker and English gloss
    pub fn show_dialogue(&self, state: &ShoppingState) -> Result<()> {
        let mut stdout = stdout();
        let (Some(product), Some(line)) = (state.product(), state.current_line()) else {
            return Ok(());
        };

        execute!(
            stdout,
            cursor::MoveTo(0, 2),
            SetForegroundColor(Color::DarkGrey),
            Print(format!(
                "{} × {} | line {}/{}",
                product.name_ru,
                state.quantity,
                state.step + 1,
                state.lines().len()
            )),
            ResetColor,
            cursor::MoveTo(0, 4),
            SetForegroundColor(match line.speaker {
                Speaker::Customer => Color::Blue,
                Speaker::Seller => Color::Green,
            }),
            Print(format!("{}: ", line.speaker.label())),
            ResetColor,
            Print(&line.ru),
            cursor::MoveTo(0, 5),
            SetForegroundColor(Color::DarkGrey),
            Print(&line.en),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Key help on the bottom line
    pub fn show_help(&self, text: &str) -> Result<()> {
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, 12),
            SetForegroundColor(Color::DarkGrey),
            Print(text),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Reset terminal state and cleanup
    pub fn shutdown(&self) -> Result<()> {
        let mut stdout = stdout();

        if self.use_alternate_screen {
            execute!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        }

        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.shutdown();
    }
}

/// Print the vocabulary listing as plain text
pub fn print_vocabulary(sections: &[VocabularySection]) {
    for section in sections {
        println!("{}", section.title);
        println!("{}", "─".repeat(40));
        for (label, russian) in &section.entries {
            println!("  {:>6}  {}", label, russian);
        }
        println!();
    }
    println!("Stress marks ´ show which syllable to emphasize when speaking.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrainerError;

    #[test]
    fn test_raw_mode_failure_is_reported() {
        let result = Display::enter(|| Err(io::Error::other("not a terminal")));
        assert!(matches!(result, Err(TrainerError::Io(_))));
    }

    #[test]
    fn test_raw_mode_enabled_after_alternate_screen() {
        let mut called = false;
        let display = Display::enter(|| {
            called = true;
            Ok(())
        })
        .unwrap();
        assert!(called);
        assert!(display.use_alternate_screen);
    }
}
