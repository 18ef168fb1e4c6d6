//! Reference listing of the words used by the numbers drill

use super::operator::{Connector, Operator};
use super::words::{to_words, to_words_as_answer};

/// A titled group of (label, Russian) pairs
#[derive(Clone, Debug, PartialEq)]
pub struct VocabularySection {
    pub title: &'static str,
    pub entries: Vec<(String, String)>,
}

impl VocabularySection {
    fn numbers(title: &'static str, values: impl IntoIterator<Item = u32>) -> Self {
        VocabularySection {
            title,
            entries: values
                .into_iter()
                .map(|n| (n.to_string(), to_words(n)))
                .collect(),
        }
    }
}

/// All sections, in the order they are displayed
pub fn sections() -> Vec<VocabularySection> {
    vec![
        VocabularySection::numbers("Numbers 0-20", 0..=20),
        VocabularySection::numbers("Tens", (20..=90).step_by(10)),
        VocabularySection::numbers("Hundreds", (100..=900).step_by(100)),
        VocabularySection::numbers("Thousands", (1000..=10_000).step_by(1000)),
        VocabularySection {
            title: "Operators",
            entries: Operator::ALL
                .into_iter()
                .map(|op| (op.symbol().to_string(), op.phrase().to_string()))
                .collect(),
        },
        VocabularySection {
            title: "Result",
            entries: vec![
                (
                    "=".to_string(),
                    format!(
                        "{} / {}",
                        Connector::Equals.phrase(),
                        Connector::WillBe.phrase()
                    ),
                ),
                (
                    "0".to_string(),
                    format!("{} / {}", to_words(0), to_words_as_answer(0)),
                ),
            ],
        },
        faq(),
    ]
}

/// Short usage notes on the result word, casual multiplication and endings
fn faq() -> VocabularySection {
    let (two, three, five) = (to_words(2), to_words(3), to_words(5));
    VocabularySection {
        title: "FAQ",
        entries: vec![
            (
                Connector::WillBe.phrase().to_string(),
                format!(
                    "also means \"equals\": {two} {} {three} {} {five}",
                    Operator::Add.phrase(),
                    Connector::WillBe.phrase()
                ),
            ),
            (
                "раз".to_string(),
                format!(
                    "casual \"times\": {two} раз {three} for {two} {} {three}",
                    Operator::Multiply.phrase()
                ),
            ),
            (
                "1-4".to_string(),
                "endings change with what is counted; drills use the basic forms".to_string(),
            ),
        ],
    }
}
