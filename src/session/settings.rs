//! Drill settings: enabled operators, value range and answer connector
//!
//! Settings are plain values. Every update returns a new `Settings`; the
//! session swaps the old one out wholesale.

use crate::numbers::range::step_on_scale;
use crate::numbers::{Connector, Operator, ValueRange};
use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub operators: BTreeSet<Operator>,
    pub range: ValueRange,
    pub connector: Connector,
}

impl Settings {
    pub fn new(operators: BTreeSet<Operator>, range: ValueRange, connector: Connector) -> Self {
        Settings {
            operators,
            range,
            connector,
        }
    }

    /// Practice can only start with at least one operator
    pub fn can_start(&self) -> bool {
        !self.operators.is_empty()
    }

    /// Enable `op` if disabled, disable it otherwise
    pub fn toggle_operator(&self, op: Operator) -> Self {
        let mut operators = self.operators.clone();
        if !operators.remove(&op) {
            operators.insert(op);
        }
        Settings {
            operators,
            ..self.clone()
        }
    }

    /// Set the lower bound; the upper bound is raised to match if needed
    pub fn with_min(&self, min: u32) -> Self {
        Settings {
            range: self.range.with_min(min),
            ..self.clone()
        }
    }

    /// Set the upper bound; the lower bound is lowered to match if needed
    pub fn with_max(&self, max: u32) -> Self {
        Settings {
            range: self.range.with_max(max),
            ..self.clone()
        }
    }

    /// Move the lower bound `delta` stops along the slider scale
    pub fn step_min(&self, delta: i32) -> Self {
        self.with_min(step_on_scale(self.range.min(), delta))
    }

    /// Move the upper bound `delta` stops along the slider scale
    pub fn step_max(&self, delta: i32) -> Self {
        self.with_max(step_on_scale(self.range.max(), delta))
    }

    pub fn with_connector(&self, connector: Connector) -> Self {
        Settings {
            connector,
            ..self.clone()
        }
    }

    /// Operator keys in display order, e.g. "+, *"
    pub fn operator_summary(&self) -> String {
        self.operators
            .iter()
            .map(|op| op.key().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            operators: BTreeSet::from([Operator::Add]),
            range: ValueRange::default(),
            connector: Connector::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_first_launch() {
        let settings = Settings::default();
        assert_eq!(settings.operator_summary(), "+");
        assert_eq!((settings.range.min(), settings.range.max()), (1, 20));
        assert_eq!(settings.connector, Connector::Equals);
        assert!(settings.can_start());
    }

    #[test]
    fn test_toggle_operator_adds_and_removes() {
        let settings = Settings::default().toggle_operator(Operator::Divide);
        assert_eq!(settings.operator_summary(), "+, /");
        let settings = settings
            .toggle_operator(Operator::Add)
            .toggle_operator(Operator::Divide);
        assert!(settings.operators.is_empty());
        assert!(!settings.can_start());
    }

    #[test]
    fn test_updates_leave_the_original_untouched() {
        let original = Settings::default();
        let changed = original.with_max(5).with_connector(Connector::WillBe);
        assert_eq!(original, Settings::default());
        assert_eq!(changed.range.max(), 5);
        assert_eq!(changed.connector, Connector::WillBe);
    }

    #[test]
    fn test_dragging_min_past_max_moves_max() {
        let settings = Settings::default().with_min(100);
        assert_eq!((settings.range.min(), settings.range.max()), (100, 100));
        let settings = settings.with_max(30);
        assert_eq!((settings.range.min(), settings.range.max()), (30, 30));
    }

    #[test]
    fn test_stepping_follows_slider_scale() {
        let settings = Settings::default().step_max(1);
        assert_eq!(settings.range.max(), 30);
        let settings = settings.step_min(-5);
        assert_eq!(settings.range.min(), 1);
        let settings = settings.step_min(12);
        assert_eq!(settings.range.min(), 40);
        assert_eq!(settings.range.max(), 40);
    }
}
