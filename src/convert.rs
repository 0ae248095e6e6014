//! Mapping from TOML/CLI settings to crate configuration types.

use hydrec_budget::BudgetConfig;
use hydrec_extrema::{BoundaryPolicy, DetectConfig};
use hydrec_mrc::{FitConfig, MrcModel, MrcSpec};

use crate::cli::BudgetArgs;
use crate::config::HydrecConfig;

/// Builds the detection config from the config file, with an optional CLI
/// window override.
pub fn build_detect_config(config: &HydrecConfig, window: Option<usize>) -> DetectConfig {
    let policy = if config.detect.include_boundaries {
        BoundaryPolicy::Include
    } else {
        BoundaryPolicy::Exclude
    };
    DetectConfig::new(window.unwrap_or(config.detect.window)).with_boundaries(policy)
}

/// Builds the MRC spec for the chosen model kind.
pub fn build_mrc_spec(config: &HydrecConfig, linear: bool) -> MrcSpec {
    let model = if linear {
        MrcModel::Linear
    } else {
        MrcModel::Exponential
    };
    let fit = FitConfig::new()
        .with_max_iterations(config.fit.max_iterations)
        .with_tolerance(config.fit.tolerance);
    MrcSpec::new(model).with_config(fit)
}

/// Builds the budget config from the config file and CLI overrides.
pub fn build_budget_config(config: &HydrecConfig, args: &BudgetArgs) -> BudgetConfig {
    BudgetConfig::new(
        args.runoff_coeff.unwrap_or(config.budget.runoff_coeff),
        args.max_storage.unwrap_or(config.budget.max_storage),
    )
    .with_melt_coeff(config.budget.melt_coeff)
    .with_melt_threshold(config.budget.melt_threshold)
}
