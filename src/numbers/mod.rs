//! Numbers drill: problem generation and Russian rendering
//!
//! # Components
//! - `operator.rs`: Operators, symbols and their Russian phrases
//! - `range.rs`: Inclusive value range and the slider scale
//! - `generator.rs`: Range-constrained random problem generator
//! - `words.rs`: Number-to-words renderer (0..=10000)
//! - `phrase.rs`: Spoken and numeric forms of a problem
//! - `vocabulary.rs`: Reference listing of the drilled words

pub mod generator;
pub mod operator;
pub mod phrase;
pub mod range;
pub mod vocabulary;
pub mod words;

pub use generator::{Problem, ProblemGenerator};
pub use operator::{Connector, Operator};
pub use range::ValueRange;
