use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Top-level hydrec configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HydrecConfig {
    /// Extrema detection settings.
    #[serde(default)]
    pub detect: DetectToml,

    /// MRC fit settings.
    #[serde(default)]
    pub fit: FitToml,

    /// Surface water budget settings.
    #[serde(default)]
    pub budget: BudgetToml,
}

impl HydrecConfig {
    /// Loads a configuration file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config: {}", path.display()))?;
                toml::from_str(&contents)
                    .with_context(|| format!("failed to parse config: {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetectToml {
    /// Detection window in samples.
    #[serde(default = "default_window")]
    pub window: usize,
    /// Force boundary samples into the partition.
    #[serde(default)]
    pub include_boundaries: bool,
}

impl Default for DetectToml {
    fn default() -> Self {
        Self {
            window: default_window(),
            include_boundaries: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FitToml {
    /// Outer Gauss-Newton iteration cap.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Parameter-step convergence tolerance.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for FitToml {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BudgetToml {
    /// Runoff coefficient in [0, 1].
    #[serde(default = "default_runoff_coeff")]
    pub runoff_coeff: f64,
    /// Readily-available storage capacity in mm.
    #[serde(default = "default_max_storage")]
    pub max_storage: f64,
    /// Degree-day snowmelt coefficient in mm/°C/day.
    #[serde(default = "default_melt_coeff")]
    pub melt_coeff: f64,
    /// Rain/snow temperature threshold in °C.
    #[serde(default = "default_melt_threshold")]
    pub melt_threshold: f64,
    /// Initial specific yield for hydrograph comparison.
    #[serde(default = "default_specific_yield")]
    pub specific_yield: f64,
}

impl Default for BudgetToml {
    fn default() -> Self {
        Self {
            runoff_coeff: default_runoff_coeff(),
            max_storage: default_max_storage(),
            melt_coeff: default_melt_coeff(),
            melt_threshold: default_melt_threshold(),
            specific_yield: default_specific_yield(),
        }
    }
}

fn default_window() -> usize {
    4
}

fn default_max_iterations() -> usize {
    100
}

fn default_tolerance() -> f64 {
    0.001
}

fn default_runoff_coeff() -> f64 {
    0.3
}

fn default_max_storage() -> f64 {
    100.0
}

fn default_melt_coeff() -> f64 {
    4.0
}

fn default_melt_threshold() -> f64 {
    1.5
}

fn default_specific_yield() -> f64 {
    0.25
}
