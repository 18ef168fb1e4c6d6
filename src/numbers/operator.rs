//! Arithmetic operators and their Russian vocabulary

use crate::error::TrainerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four drilled operations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in display order
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol shown in the problem line
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// ASCII key used on the command line, in config files and in the TUI
    pub fn key(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Russian phrase read between the operands (with stress marks)
    pub fn phrase(self) -> &'static str {
        match self {
            Operator::Add => "плю́с",
            Operator::Subtract => "ми́нус",
            Operator::Multiply => "умно́жить на",
            Operator::Divide => "раздели́ть на",
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.key() == key)
    }

    /// Apply the operator, returning `None` on a non-exact or undefined result
    pub fn apply(self, lhs: u32, rhs: u32) -> Option<u32> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Divide => {
                if rhs == 0 || lhs % rhs != 0 {
                    None
                } else {
                    Some(lhs / rhs)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" | "add" | "plus" => Ok(Operator::Add),
            "-" | "−" | "subtract" | "minus" => Ok(Operator::Subtract),
            "*" | "×" | "multiply" | "times" => Ok(Operator::Multiply),
            "/" | "÷" | "divide" => Ok(Operator::Divide),
            other => Err(TrainerError::UnknownOperator(other.to_string())),
        }
    }
}

impl TryFrom<String> for Operator {
    type Error = TrainerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.key().to_string()
    }
}

/// Word placed between the question and the answer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connector {
    /// "равно́" (equals)
    #[default]
    Equals,
    /// "бу́дет" (will be), the colloquial alternative
    WillBe,
}

impl Connector {
    pub fn phrase(self) -> &'static str {
        match self {
            Connector::Equals => "равно́",
            Connector::WillBe => "бу́дет",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Connector::Equals => Connector::WillBe,
            Connector::WillBe => Connector::Equals,
        }
    }
}
