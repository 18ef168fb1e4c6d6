//! Session Management: Settings and per-drill state
//!
//! # Components
//! - `settings.rs`: Operator set, value range and connector
//! - `state.rs`: Numbers drill state advanced by intents
//! - `shopping.rs`: Shopping dialogue state advanced by intents

pub mod settings;
pub mod shopping;
pub mod state;

pub use settings::Settings;
pub use shopping::{ShoppingIntent, ShoppingState};
pub use state::{Intent, SessionState};
