mod engine;
mod options;

pub use engine::{decide_with, Candidate, Decision, Engine};
pub use options::EngineOptions;
