//! Numbers drill session state
//!
//! Maintains:
//! - Current settings and whether the settings screen is open
//! - The problem on display and whether its answer is revealed
//! - Counters and timing for the end-of-session summary
//!
//! The state is advanced by `apply`, which consumes the old value and
//! returns its replacement.

use super::settings::Settings;
use crate::numbers::{Operator, Problem, ProblemGenerator};
use rand::Rng;
use std::time::Instant;

/// User intents on the numbers drill
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Leave the settings screen and show a first problem
    Start,
    GenerateNew,
    ToggleOperator(Operator),
    StepMin(i32),
    StepMax(i32),
    SetMin(u32),
    SetMax(u32),
    ToggleAnswer,
    ToggleConnector,
    OpenSettings,
}

/// Counters for the session summary
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SessionStats {
    pub problems_generated: u32,
    pub answers_revealed: u32,
}

/// Complete session state
#[derive(Clone, Debug)]
pub struct SessionState {
    pub settings: Settings,
    /// Settings screen is showing (practice not started)
    pub configuring: bool,
    pub problem: Option<Problem>,
    pub answer_shown: bool,
    pub stats: SessionStats,
    /// Session start time
    pub start_time: Option<Instant>,
}

impl SessionState {
    /// Create a session on the settings screen
    pub fn new(settings: Settings) -> Self {
        SessionState {
            settings,
            configuring: true,
            problem: None,
            answer_shown: false,
            stats: SessionStats::default(),
            start_time: None,
        }
    }

    /// Start the session timer
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get session duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// Get session duration in minutes
    pub fn duration_mins(&self) -> f64 {
        self.duration_secs() / 60.0
    }

    /// Advance the session by one intent
    pub fn apply<R: Rng>(self, intent: Intent, generator: &mut ProblemGenerator<R>) -> Self {
        match intent {
            Intent::Start => {
                if !self.settings.can_start() {
                    return self;
                }
                SessionState {
                    configuring: false,
                    ..self
                }
                .regenerate(generator)
            }
            Intent::GenerateNew => {
                if self.configuring {
                    self
                } else {
                    self.regenerate(generator)
                }
            }
            Intent::ToggleAnswer => match self.problem {
                Some(_) => {
                    let answer_shown = !self.answer_shown;
                    let mut stats = self.stats;
                    if answer_shown {
                        stats.answers_revealed += 1;
                    }
                    SessionState {
                        answer_shown,
                        stats,
                        ..self
                    }
                }
                None => self,
            },
            Intent::OpenSettings => SessionState {
                configuring: true,
                ..self
            },
            Intent::ToggleConnector => {
                let settings = self.settings.with_connector(self.settings.connector.toggled());
                SessionState { settings, ..self }
            }
            Intent::ToggleOperator(op) => {
                let settings = self.settings.toggle_operator(op);
                self.with_settings(settings, generator)
            }
            Intent::StepMin(delta) => {
                let settings = self.settings.step_min(delta);
                self.with_settings(settings, generator)
            }
            Intent::StepMax(delta) => {
                let settings = self.settings.step_max(delta);
                self.with_settings(settings, generator)
            }
            Intent::SetMin(value) => {
                let settings = self.settings.with_min(value);
                self.with_settings(settings, generator)
            }
            Intent::SetMax(value) => {
                let settings = self.settings.with_max(value);
                self.with_settings(settings, generator)
            }
        }
    }

    /// Swap in new settings; a practising session gets a fresh problem
    fn with_settings<R: Rng>(self, settings: Settings, generator: &mut ProblemGenerator<R>) -> Self {
        if settings == self.settings {
            return self;
        }
        let next = SessionState { settings, ..self };
        if next.configuring || !next.settings.can_start() {
            next
        } else {
            next.regenerate(generator)
        }
    }

    fn regenerate<R: Rng>(self, generator: &mut ProblemGenerator<R>) -> Self {
        let problem = generator.generate_from(&self.settings.operators, self.settings.range);
        let mut stats = self.stats;
        if problem.is_some() {
            stats.problems_generated += 1;
        }
        SessionState {
            problem: problem.or(self.problem),
            answer_shown: false,
            stats,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> ProblemGenerator {
        ProblemGenerator::seeded(12)
    }

    #[test]
    fn test_new_session_waits_on_settings() {
        let session = SessionState::new(Settings::default());
        assert!(session.configuring);
        assert!(session.problem.is_none());
        assert_eq!(session.duration_secs(), 0.0);
    }

    #[test]
    fn test_start_generates_a_problem() {
        let mut generator = generator();
        let session = SessionState::new(Settings::default()).apply(Intent::Start, &mut generator);
        assert!(!session.configuring);
        let problem = session.problem.unwrap();
        assert_eq!(problem.operator, Operator::Add);
        assert!(problem.is_consistent());
        assert_eq!(session.stats.problems_generated, 1);
    }

    #[test]
    fn test_cannot_start_without_operators() {
        let mut generator = generator();
        let settings = Settings::default().toggle_operator(Operator::Add);
        let session = SessionState::new(settings).apply(Intent::Start, &mut generator);
        assert!(session.configuring);
        assert!(session.problem.is_none());
    }

    #[test]
    fn test_generate_new_hides_answer() {
        let mut generator = generator();
        let session = SessionState::new(Settings::default())
            .apply(Intent::Start, &mut generator)
            .apply(Intent::ToggleAnswer, &mut generator);
        assert!(session.answer_shown);
        assert_eq!(session.stats.answers_revealed, 1);

        let session = session.apply(Intent::GenerateNew, &mut generator);
        assert!(!session.answer_shown);
        assert_eq!(session.stats.problems_generated, 2);
    }

    #[test]
    fn test_settings_change_while_practicing_regenerates() {
        let mut generator = generator();
        let session = SessionState::new(Settings::default())
            .apply(Intent::Start, &mut generator)
            .apply(Intent::ToggleOperator(Operator::Add), &mut generator)
            .apply(Intent::ToggleOperator(Operator::Multiply), &mut generator);
        assert_eq!(session.problem.unwrap().operator, Operator::Multiply);
        assert_eq!(session.stats.problems_generated, 2);
    }

    #[test]
    fn test_settings_change_on_settings_screen_does_not_generate() {
        let mut generator = generator();
        let session = SessionState::new(Settings::default())
            .apply(Intent::SetMax(100), &mut generator)
            .apply(Intent::StepMin(1), &mut generator);
        assert!(session.problem.is_none());
        assert_eq!(session.settings.range.max(), 100);
        assert_eq!(session.settings.range.min(), 2);
    }

    #[test]
    fn test_range_clamping_through_intents() {
        let mut generator = generator();
        let session = SessionState::new(Settings::default())
            .apply(Intent::SetMin(500), &mut generator);
        assert_eq!(session.settings.range.max(), 500);
        let session = session.apply(Intent::SetMax(3), &mut generator);
        assert_eq!(session.settings.range.min(), 3);
    }

    #[test]
    fn test_toggle_answer_without_problem_is_noop() {
        let mut generator = generator();
        let session = SessionState::new(Settings::default()).apply(Intent::ToggleAnswer, &mut generator);
        assert!(!session.answer_shown);
        assert_eq!(session.stats.answers_revealed, 0);
    }

    #[test]
    fn test_open_settings_keeps_problem() {
        let mut generator = generator();
        let session = SessionState::new(Settings::default())
            .apply(Intent::Start, &mut generator)
            .apply(Intent::OpenSettings, &mut generator);
        assert!(session.configuring);
        assert!(session.problem.is_some());
    }
}
