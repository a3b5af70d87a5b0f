/// Configuration options for the engine
use anyhow::{bail, Result};

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Whether to print per-node shop lines during search
    pub trace: bool,
    /// Fixed RNG seed; None draws a fresh stream per decision
    pub seed: Option<u64>,
}

impl EngineOptions {
    /// Set an option by name
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "trace" => self.trace = value.parse()?,
            "seed" => self.seed = Some(value.parse()?),
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            trace: true,
            seed: None,
        }
    }
}
