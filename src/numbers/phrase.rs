//! Spoken form of a problem

use super::generator::Problem;
use super::operator::Connector;
use super::words::{to_words, to_words_as_answer};

/// Question part, read before the answer: "два плю́с три"
pub fn question_sentence(problem: &Problem) -> String {
    format!(
        "{} {} {}",
        to_words(problem.operand1),
        problem.operator.phrase(),
        to_words(problem.operand2)
    )
}

/// Full sentence with the answer: "два плю́с три равно́ пять"
pub fn problem_sentence(problem: &Problem, connector: Connector) -> String {
    format!(
        "{} {} {}",
        question_sentence(problem),
        connector.phrase(),
        to_words_as_answer(problem.result)
    )
}

/// Numeric form shown before the answer is revealed: "2 + 3 = ?"
pub fn numeric_question(problem: &Problem) -> String {
    format!(
        "{} {} {} = ?",
        problem.operand1,
        problem.operator.symbol(),
        problem.operand2
    )
}

/// Numeric form with the answer: "2 + 3 = 5"
pub fn numeric_answer(problem: &Problem) -> String {
    format!(
        "{} {} {} = {}",
        problem.operand1,
        problem.operator.symbol(),
        problem.operand2,
        problem.result
    )
}
