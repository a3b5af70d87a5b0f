//! Evaluation and search

pub mod eval;
pub mod search;

pub use eval::evaluate;
pub use search::{SearchContext, SearchStats, Trace};
