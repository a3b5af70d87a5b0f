//! Warchest - decision engine for a unit-drafting shop game

pub mod ai;
pub mod core;
pub mod engine;
pub mod utils;

// Re-export commonly used items
pub use engine::{Decision, Engine, EngineOptions};
