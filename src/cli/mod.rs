//! CLI Interface: User input and terminal rendering
//!
//! # Components
//! - `input.rs`: Keystroke capture and key-to-intent mapping
//! - `display.rs`: Terminal rendering and UI

pub mod display;
pub mod input;
