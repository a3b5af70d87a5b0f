pub mod rng;

pub use rng::{make_rng, seeded_rng};
