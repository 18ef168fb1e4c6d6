//! Range-constrained problem generator
//!
//! Each attempt anchors one of the three quantities (first operand, second
//! operand or result) inside `[min, max]`, derives the other two from the
//! operator's identity and then checks all three against the acceptance
//! predicate. Anchoring the result part of the time keeps products and sums
//! from piling up above the range.
//!
//! After `max_attempts` rejections the generator returns `min + min`.

use super::operator::Operator;
use super::range::ValueRange;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Attempt budget before falling back
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// A generated arithmetic problem
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub operand1: u32,
    pub operand2: u32,
    pub operator: Operator,
    pub result: u32,
}

impl Problem {
    /// Deterministic problem used when sampling gives up
    pub fn fallback(range: ValueRange) -> Self {
        let min = range.min();
        Problem {
            operand1: min,
            operand2: min,
            operator: Operator::Add,
            result: min.saturating_add(min),
        }
    }

    /// Whether the operator's identity holds exactly
    pub fn is_consistent(&self) -> bool {
        self.operator.apply(self.operand1, self.operand2) == Some(self.result)
    }
}

/// Quantity pinned to the configured range on an attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Anchor {
    FirstOperand,
    SecondOperand,
    Result,
}

const ANCHORS: [Anchor; 3] = [Anchor::FirstOperand, Anchor::SecondOperand, Anchor::Result];

/// Raw proposal before the acceptance check; signed so derivations never wrap
#[derive(Clone, Copy, Debug)]
struct Candidate {
    operand1: i64,
    operand2: i64,
    result: i64,
}

/// Random problem source
pub struct ProblemGenerator<R = StdRng> {
    rng: R,
    max_attempts: u32,
    /// Calls that ran out of attempts and returned the fallback
    fallbacks: u32,
}

impl ProblemGenerator<StdRng> {
    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ProblemGenerator<R> {
    pub fn new(rng: R) -> Self {
        ProblemGenerator {
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            fallbacks: 0,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Number of fallback problems handed out so far
    pub fn fallbacks(&self) -> u32 {
        self.fallbacks
    }

    /// Generate a problem for `operator` within `range`
    pub fn generate(&mut self, operator: Operator, range: ValueRange) -> Problem {
        for _ in 0..self.max_attempts {
            let anchor = *ANCHORS
                .choose(&mut self.rng)
                .unwrap_or(&Anchor::Result);
            let Some(candidate) = self.propose(operator, anchor, range) else {
                continue;
            };
            if let Some(problem) = accept(operator, candidate, range) {
                return problem;
            }
        }

        self.fallbacks += 1;
        debug!(
            ?operator,
            min = range.min(),
            max = range.max(),
            attempts = self.max_attempts,
            fallbacks = self.fallbacks,
            "no problem satisfied the range, using fallback"
        );
        Problem::fallback(range)
    }

    /// Pick an operator from `operators` and generate a problem for it.
    /// Returns `None` when no operator is enabled.
    pub fn generate_from(
        &mut self,
        operators: &BTreeSet<Operator>,
        range: ValueRange,
    ) -> Option<Problem> {
        let enabled: Vec<Operator> = operators.iter().copied().collect();
        let operator = *enabled.choose(&mut self.rng)?;
        Some(self.generate(operator, range))
    }

    /// Derive the two free quantities from the anchored one
    fn propose(
        &mut self,
        operator: Operator,
        anchor: Anchor,
        range: ValueRange,
    ) -> Option<Candidate> {
        let lo = i64::from(range.min());
        let hi = i64::from(range.max());

        let candidate = match (operator, anchor) {
            (Operator::Add, Anchor::FirstOperand | Anchor::SecondOperand) => {
                let anchored = self.sample(lo, hi)?;
                let other = self.sample(1, hi)?;
                let (operand1, operand2) = ordered(anchor, anchored, other);
                Candidate {
                    operand1,
                    operand2,
                    result: operand1 + operand2,
                }
            }
            (Operator::Add, Anchor::Result) => {
                let result = self.sample(lo, hi)?;
                let operand1 = self.sample(1, result.min(hi))?;
                Candidate {
                    operand1,
                    operand2: result - operand1,
                    result,
                }
            }

            (Operator::Subtract, Anchor::FirstOperand) => {
                let operand1 = self.sample(lo, hi)?;
                let operand2 = self.sample(0, operand1.min(hi))?;
                Candidate {
                    operand1,
                    operand2,
                    result: operand1 - operand2,
                }
            }
            (Operator::Subtract, Anchor::SecondOperand) => {
                let operand2 = self.sample(lo, hi)?;
                let operand1 = operand2 + self.sample(0, hi - operand2)?;
                Candidate {
                    operand1,
                    operand2,
                    result: operand1 - operand2,
                }
            }
            (Operator::Subtract, Anchor::Result) => {
                let result = self.sample(lo, hi)?;
                let operand2 = self.sample(0, hi)?;
                Candidate {
                    operand1: result + operand2,
                    operand2,
                    result,
                }
            }

            (Operator::Multiply, Anchor::FirstOperand | Anchor::SecondOperand) => {
                let anchored = self.sample(lo, hi)?;
                let limit = if anchored == 0 { hi } else { (hi / anchored).min(hi) };
                let other = self.sample(1, limit)?;
                let (operand1, operand2) = ordered(anchor, anchored, other);
                Candidate {
                    operand1,
                    operand2,
                    result: operand1.saturating_mul(operand2),
                }
            }
            (Operator::Multiply, Anchor::Result) => {
                let result = self.sample(lo, hi)?;
                let mut operand1 = self.sample(1, result.min(hi))?;
                if result % operand1 != 0 {
                    let divisors: Vec<i64> =
                        (1..=result.min(hi)).filter(|d| result % d == 0).collect();
                    operand1 = divisors.choose(&mut self.rng).copied().unwrap_or(1);
                }
                Candidate {
                    operand1,
                    operand2: result / operand1,
                    result,
                }
            }

            (Operator::Divide, Anchor::FirstOperand) => {
                let operand1 = self.sample(lo, hi)?;
                let operand2 = self.sample(1, operand1.min(hi))?;
                if operand1 % operand2 != 0 {
                    return None;
                }
                Candidate {
                    operand1,
                    operand2,
                    result: operand1 / operand2,
                }
            }
            (Operator::Divide, Anchor::SecondOperand) => {
                let operand2 = self.sample(lo, hi)?;
                let result = self.sample(1, hi)?;
                Candidate {
                    operand1: result.saturating_mul(operand2),
                    operand2,
                    result,
                }
            }
            (Operator::Divide, Anchor::Result) => {
                let result = self.sample(lo, hi)?;
                let operand2 = self.sample(1, hi)?;
                Candidate {
                    operand1: result.saturating_mul(operand2),
                    operand2,
                    result,
                }
            }
        };

        Some(candidate)
    }

    /// Uniform sample from `[lo, hi]`; an empty interval rejects the attempt
    fn sample(&mut self, lo: i64, hi: i64) -> Option<i64> {
        (lo <= hi).then(|| self.rng.gen_range(lo..=hi))
    }
}

/// Place the anchored value in the slot its anchor names
fn ordered(anchor: Anchor, anchored: i64, other: i64) -> (i64, i64) {
    match anchor {
        Anchor::SecondOperand => (other, anchored),
        _ => (anchored, other),
    }
}

/// Acceptance predicate applied after every attempt
fn accept(operator: Operator, candidate: Candidate, range: ValueRange) -> Option<Problem> {
    let ceiling = i64::from(range.ceiling());
    let Candidate {
        operand1,
        operand2,
        result,
    } = candidate;

    if [operand1, operand2, result]
        .iter()
        .any(|&value| value < 0 || value > ceiling)
    {
        return None;
    }

    let exact = match operator {
        // "+ 0" is not a drill; both addends must be at least one
        Operator::Add => operand1 >= 1 && operand2 >= 1 && operand1 + operand2 == result,
        Operator::Subtract => operand1 - operand2 == result,
        Operator::Multiply => operand1.checked_mul(operand2) == Some(result),
        Operator::Divide => operand2 != 0 && operand2.checked_mul(result) == Some(operand1),
    };
    if !exact {
        return None;
    }

    let problem = Problem {
        operand1: u32::try_from(operand1).ok()?,
        operand2: u32::try_from(operand2).ok()?,
        operator,
        result: u32::try_from(result).ok()?,
    };
    debug_assert!(problem.is_consistent());
    Some(problem)
}
