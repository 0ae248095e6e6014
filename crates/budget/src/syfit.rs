//! Specific-yield calibration against observed water levels.

use tracing::debug;

use crate::error::BudgetError;
use crate::hydrograph::{synthetic_hydrograph, Direction};

/// Tunable parameters of the specific-yield calibration.
#[derive(Debug, Clone)]
pub struct SyFitConfig {
    /// Iteration cap for the Gauss-Newton loop.
    max_iterations: usize,
    /// Convergence tolerance on the Sy step.
    tolerance: f64,
    /// Relative forward-difference step for the sensitivity.
    relative_step: f64,
    /// Allowed RMSE worsening (meters) before a step is halved.
    overshoot_tolerance: f64,
    /// Step-halving cap.
    max_damping_iterations: usize,
}

impl SyFitConfig {
    /// Creates a configuration with the default tolerances and caps.
    pub fn new() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 0.001,
            relative_step: 0.01,
            overshoot_tolerance: 1e-4,
            max_damping_iterations: 50,
        }
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the convergence tolerance on the Sy step.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the iteration cap.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns the convergence tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the relative forward-difference step.
    pub fn relative_step(&self) -> f64 {
        self.relative_step
    }

    /// Returns the allowed RMSE worsening before a step is halved.
    pub fn overshoot_tolerance(&self) -> f64 {
        self.overshoot_tolerance
    }

    /// Returns the step-halving cap.
    pub fn max_damping_iterations(&self) -> usize {
        self.max_damping_iterations
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), BudgetError> {
        if self.max_iterations == 0 {
            return Err(BudgetError::InvalidConfig {
                parameter: "max_iterations",
                value: 0.0,
            });
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(BudgetError::InvalidConfig {
                parameter: "tolerance",
                value: self.tolerance,
            });
        }
        if !self.relative_step.is_finite() || self.relative_step <= 0.0 {
            return Err(BudgetError::InvalidConfig {
                parameter: "relative_step",
                value: self.relative_step,
            });
        }
        Ok(())
    }
}

impl Default for SyFitConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a specific-yield calibration.
#[derive(Debug, Clone)]
pub struct SyFit {
    sy: f64,
    rmse: f64,
    predicted: Vec<f64>,
    iterations: usize,
}

impl SyFit {
    /// Returns the calibrated specific yield.
    pub fn sy(&self) -> f64 {
        self.sy
    }

    /// Returns the RMSE against the present observations, in meters.
    pub fn rmse(&self) -> f64 {
        self.rmse
    }

    /// Returns the simulated level series at the calibrated Sy
    /// (`recharge.len() + 1` samples).
    pub fn predicted(&self) -> &[f64] {
        &self.predicted
    }

    /// Returns the number of Gauss-Newton iterations performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

/// Calibrates the specific yield so the forward synthetic hydrograph driven
/// by `recharge` best matches the observed levels.
///
/// `observed` holds one optional level per hydrograph sample
/// (`recharge.len() + 1` entries); gaps are `None`. The first entry seeds
/// the simulation and must be present. Single-parameter damped Gauss-Newton
/// with a relative forward-difference sensitivity, starting from `sy0`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`BudgetError::ObservedLengthMismatch`] | lengths do not line up |
/// | [`BudgetError::MissingSeedLevel`] | first observation absent |
/// | [`BudgetError::NonFiniteObserved`] | a present observation is NaN/infinite |
/// | [`BudgetError::TooFewObservations`] | fewer than 2 present |
/// | [`BudgetError::InvalidSpecificYield`] | `sy0` outside `(0, 1]` |
/// | [`BudgetError::SingularSystem`] | vanished sensitivity |
/// | [`BudgetError::NotConverged`] | an iteration cap was reached |
pub fn fit_specific_yield(
    observed: &[Option<f64>],
    recharge: &[f64],
    a: f64,
    b: f64,
    sy0: f64,
    config: &SyFitConfig,
) -> Result<SyFit, BudgetError> {
    config.validate()?;

    if observed.len() != recharge.len() + 1 {
        return Err(BudgetError::ObservedLengthMismatch {
            observed: observed.len(),
            expected: recharge.len(),
            needed: recharge.len() + 1,
        });
    }
    let seed = observed
        .first()
        .copied()
        .flatten()
        .ok_or(BudgetError::MissingSeedLevel)?;

    let mut targets = Vec::new();
    for (index, level) in observed.iter().enumerate() {
        if let Some(value) = level {
            if !value.is_finite() {
                return Err(BudgetError::NonFiniteObserved { index });
            }
            targets.push((index, *value));
        }
    }
    if targets.len() < 2 {
        return Err(BudgetError::TooFewObservations { n: targets.len() });
    }
    if !sy0.is_finite() || sy0 <= 0.0 || sy0 > 1.0 {
        return Err(BudgetError::InvalidSpecificYield { value: sy0 });
    }

    let simulate =
        |sy: f64| synthetic_hydrograph(recharge, sy, a, b, seed, Direction::Forward);
    let score = |levels: &[f64]| {
        let predicted: Vec<f64> = targets.iter().map(|&(i, _)| levels[i]).collect();
        let observed: Vec<f64> = targets.iter().map(|&(_, v)| v).collect();
        hydrec_stats::rmse(&observed, &predicted)
    };

    let mut sy = sy0;
    let mut predicted = simulate(sy)?;
    let mut rmse = score(&predicted);
    debug!(sy, rmse, "initial specific yield");

    let mut iterations = 0usize;
    loop {
        if iterations == config.max_iterations() {
            return Err(BudgetError::NotConverged { iterations });
        }
        iterations += 1;

        // Relative forward-difference sensitivity at the present targets;
        // flipped to a backward difference when the bump would leave (0, 1].
        let mut step = sy * config.relative_step();
        if sy + step > 1.0 {
            step = -step;
        }
        let bumped = simulate(sy + step)?;
        let sensitivity: Vec<f64> = targets
            .iter()
            .map(|&(i, _)| (bumped[i] - predicted[i]) / step)
            .collect();
        let residuals: Vec<f64> = targets.iter().map(|&(i, v)| v - predicted[i]).collect();

        let jtj: f64 = sensitivity.iter().map(|x| x * x).sum();
        let jtr: f64 = sensitivity
            .iter()
            .zip(residuals.iter())
            .map(|(x, r)| x * r)
            .sum();
        if !jtj.is_finite() || jtj <= 0.0 {
            return Err(BudgetError::SingularSystem);
        }
        let mut delta = jtr / jtj;

        // Apply with overshoot damping; Sy must stay positive.
        let sy_old = sy;
        let rmse_old = rmse;
        let mut settled = false;
        for _ in 0..config.max_damping_iterations() {
            let candidate = sy_old + delta;
            if candidate <= 0.0 || candidate > 1.0 {
                delta *= 0.5;
                continue;
            }
            predicted = simulate(candidate)?;
            rmse = score(&predicted);
            if rmse - rmse_old > config.overshoot_tolerance() {
                delta *= 0.5;
            } else {
                sy = candidate;
                settled = true;
                break;
            }
        }
        if !settled {
            return Err(BudgetError::NotConverged { iterations });
        }

        let change = (sy - sy_old).abs();
        debug!(iteration = iterations, sy, rmse, change, "specific-yield iteration");
        if change < config.tolerance() {
            break;
        }
    }

    Ok(SyFit {
        sy,
        rmse,
        predicted,
        iterations,
    })
}
