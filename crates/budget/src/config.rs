//! Configuration for the daily surface water budget.

use crate::error::BudgetError;

/// Parameters of the surface water budget.
///
/// `runoff_coeff` and `max_storage` are the calibration knobs; the snowmelt
/// constants default to a degree-day coefficient of 4 mm/°C/day with a
/// 1.5 °C rain/snow threshold.
///
/// # Example
///
/// ```
/// use hydrec_budget::BudgetConfig;
///
/// let config = BudgetConfig::new(0.3, 100.0).with_melt_threshold(0.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct BudgetConfig {
    /// Fraction of available water lost to runoff, in `[0, 1]`.
    runoff_coeff: f64,
    /// Readily-available storage capacity, in mm.
    max_storage: f64,
    /// Degree-day snowmelt coefficient, in mm/°C/day.
    melt_coeff: f64,
    /// Air temperature above which precipitation falls as rain, in °C.
    melt_threshold: f64,
}

impl BudgetConfig {
    /// Creates a configuration with the given runoff coefficient and storage
    /// capacity (mm), and the default snowmelt constants.
    pub fn new(runoff_coeff: f64, max_storage: f64) -> Self {
        Self {
            runoff_coeff,
            max_storage,
            melt_coeff: 4.0,
            melt_threshold: 1.5,
        }
    }

    /// Sets the degree-day snowmelt coefficient (mm/°C/day).
    pub fn with_melt_coeff(mut self, melt_coeff: f64) -> Self {
        self.melt_coeff = melt_coeff;
        self
    }

    /// Sets the rain/snow temperature threshold (°C).
    pub fn with_melt_threshold(mut self, melt_threshold: f64) -> Self {
        self.melt_threshold = melt_threshold;
        self
    }

    /// Returns the runoff coefficient.
    pub fn runoff_coeff(&self) -> f64 {
        self.runoff_coeff
    }

    /// Returns the storage capacity in mm.
    pub fn max_storage(&self) -> f64 {
        self.max_storage
    }

    /// Returns the snowmelt coefficient in mm/°C/day.
    pub fn melt_coeff(&self) -> f64 {
        self.melt_coeff
    }

    /// Returns the rain/snow threshold in °C.
    pub fn melt_threshold(&self) -> f64 {
        self.melt_threshold
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), BudgetError> {
        if !self.runoff_coeff.is_finite() || !(0.0..=1.0).contains(&self.runoff_coeff) {
            return Err(BudgetError::InvalidConfig {
                parameter: "runoff_coeff",
                value: self.runoff_coeff,
            });
        }
        if !self.max_storage.is_finite() || self.max_storage < 0.0 {
            return Err(BudgetError::InvalidConfig {
                parameter: "max_storage",
                value: self.max_storage,
            });
        }
        if !self.melt_coeff.is_finite() || self.melt_coeff < 0.0 {
            return Err(BudgetError::InvalidConfig {
                parameter: "melt_coeff",
                value: self.melt_coeff,
            });
        }
        if !self.melt_threshold.is_finite() {
            return Err(BudgetError::InvalidConfig {
                parameter: "melt_threshold",
                value: self.melt_threshold,
            });
        }
        Ok(())
    }
}
