//! Configuration for the damped Gauss-Newton fit.

use crate::error::MrcError;

/// Tunable parameters of the MRC fit.
///
/// The defaults reproduce the calibrated behavior of the estimation scheme:
/// a parameter-step tolerance of 0.001 (also used as the forward-difference
/// step for the numerical Jacobian), an RMSE overshoot allowance of 0.001 m
/// before a step is halved, and a minimum `|cos θ|` of 0.08 between the
/// solved step and the gradient before a step is trusted. The iteration caps
/// bound loops the scheme would otherwise run unchecked.
///
/// # Example
///
/// ```
/// use hydrec_mrc::FitConfig;
///
/// let config = FitConfig::new().with_max_iterations(50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// Outer Gauss-Newton iteration cap.
    max_iterations: usize,
    /// Convergence tolerance on the largest parameter step; doubles as the
    /// forward-difference step.
    tolerance: f64,
    /// Allowed RMSE worsening (meters) before a step is halved.
    overshoot_tolerance: f64,
    /// Minimum `|cos θ|` between step and gradient.
    min_cos_angle: f64,
    /// Marquardt damping search cap.
    max_marquardt_iterations: usize,
    /// Step-halving cap.
    max_damping_iterations: usize,
}

impl FitConfig {
    /// Creates a configuration with the default tolerances and caps.
    pub fn new() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 0.001,
            overshoot_tolerance: 0.001,
            min_cos_angle: 0.08,
            max_marquardt_iterations: 100,
            max_damping_iterations: 50,
        }
    }

    /// Sets the outer iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the parameter-step tolerance (and forward-difference step).
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the allowed RMSE worsening before a step is halved.
    pub fn with_overshoot_tolerance(mut self, overshoot_tolerance: f64) -> Self {
        self.overshoot_tolerance = overshoot_tolerance;
        self
    }

    /// Sets the minimum `|cos θ|` between step and gradient.
    pub fn with_min_cos_angle(mut self, min_cos_angle: f64) -> Self {
        self.min_cos_angle = min_cos_angle;
        self
    }

    /// Returns the outer iteration cap.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns the parameter-step tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the allowed RMSE worsening before a step is halved.
    pub fn overshoot_tolerance(&self) -> f64 {
        self.overshoot_tolerance
    }

    /// Returns the minimum `|cos θ|` between step and gradient.
    pub fn min_cos_angle(&self) -> f64 {
        self.min_cos_angle
    }

    /// Returns the Marquardt damping search cap.
    pub fn max_marquardt_iterations(&self) -> usize {
        self.max_marquardt_iterations
    }

    /// Returns the step-halving cap.
    pub fn max_damping_iterations(&self) -> usize {
        self.max_damping_iterations
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), MrcError> {
        if self.max_iterations == 0 {
            return Err(MrcError::InvalidConfig {
                parameter: "max_iterations",
                value: 0.0,
            });
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(MrcError::InvalidConfig {
                parameter: "tolerance",
                value: self.tolerance,
            });
        }
        if !self.overshoot_tolerance.is_finite() || self.overshoot_tolerance < 0.0 {
            return Err(MrcError::InvalidConfig {
                parameter: "overshoot_tolerance",
                value: self.overshoot_tolerance,
            });
        }
        if !self.min_cos_angle.is_finite()
            || self.min_cos_angle <= 0.0
            || self.min_cos_angle >= 1.0
        {
            return Err(MrcError::InvalidConfig {
                parameter: "min_cos_angle",
                value: self.min_cos_angle,
            });
        }
        Ok(())
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self::new()
    }
}
