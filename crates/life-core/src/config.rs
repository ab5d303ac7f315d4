//! Configuration types for a simulation run.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the glyph used for live cells when none is chosen
pub const DEFAULT_ICON: &str = "blue-circle";

/// Parameters for one run of the simulator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Width of the field
    pub width: i32,
    /// Height of the field
    pub height: i32,
    /// Number of generations to display
    pub generations: u64,
    /// Display pacing
    pub steps_per_second: u32,
    /// First generation to display (1-based, 0 means from the start)
    pub start_generation: u64,
    /// Seed for the random population source (derived from the clock if unset)
    pub seed: Option<u64>,
    /// Seed file describing the initial population
    pub seed_file: Option<PathBuf>,
    /// Name of the glyph used for live cells
    pub icon: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            width: 30,
            height: 30,
            generations: 20,
            steps_per_second: 5,
            start_generation: 0,
            seed: None,
            seed_file: None,
            icon: DEFAULT_ICON.to_string(),
        }
    }
}

impl RunConfig {
    /// Load a configuration from a JSON file. Missing keys take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.steps_per_second == 0 {
            return Err(Error::Validation(
                "steps_per_second must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
