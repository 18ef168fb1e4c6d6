//! Shopping drill: a scripted customer/seller dialogue
//!
//! # Components
//! - `catalog.rs`: Product fixtures with prices and availability
//! - `dialogue.rs`: Dialogue script for a chosen product and quantity

pub mod catalog;
pub mod dialogue;

pub use catalog::{Product, CATALOG};
pub use dialogue::{DialogueLine, Speaker};
