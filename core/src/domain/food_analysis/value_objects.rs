use std::{fmt, str::FromStr};

use bytes::Bytes;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct AnalyzeFoodInput {
    pub image: Bytes,
    pub manual_food_name: Option<String>,
}

/// Where food density enters the mass estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityMode {
    /// The default density is applied once to the whole portion.
    #[default]
    Uniform,
    /// Each food's share of the volume is weighed with its own density.
    PerFood,
}

impl DensityMode {
    pub fn as_str(&self) -> &str {
        match self {
            DensityMode::Uniform => "uniform",
            DensityMode::PerFood => "per_food",
        }
    }
}

impl fmt::Display for DensityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DensityMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uniform" => Ok(DensityMode::Uniform),
            "per_food" | "per-food" => Ok(DensityMode::PerFood),
            other => Err(format!("unknown density mode: {other}")),
        }
    }
}
