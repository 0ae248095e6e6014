//! Error types for the hydrec-budget crate.

/// Error type for the surface water budget, the synthetic hydrograph, and
/// the specific-yield calibration.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BudgetError {
    /// Returned when the weather forcing holds no days.
    #[error("weather forcing is empty")]
    EmptyForcing,

    /// Returned when the forcing series have different lengths.
    #[error("forcing lengths disagree: precip {precip}, temp {temp}, pet {pet}")]
    ForcingLengthMismatch {
        /// Number of precipitation days.
        precip: usize,
        /// Number of temperature days.
        temp: usize,
        /// Number of potential-ET days.
        pet: usize,
    },

    /// Returned when a forcing value is NaN or infinite.
    #[error("{series} is non-finite at index {index}")]
    NonFiniteForcing {
        /// Name of the offending series.
        series: &'static str,
        /// Position of the offending sample.
        index: usize,
    },

    /// Returned when precipitation or potential ET is negative.
    #[error("{series} is negative at index {index}: {value}")]
    NegativeForcing {
        /// Name of the offending series.
        series: &'static str,
        /// Position of the offending sample.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid {parameter}: {value}")]
    InvalidConfig {
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Returned when a specific yield is outside `(0, 1]`.
    #[error("specific yield must be in (0, 1], got {value}")]
    InvalidSpecificYield {
        /// The rejected value.
        value: f64,
    },

    /// Returned when the recharge series driving the hydrograph is empty.
    #[error("recharge series is empty")]
    EmptyRecharge,

    /// Returned when observed levels and recharge do not line up: a recharge
    /// series of n gaps spans n + 1 level samples.
    #[error("observed has {observed} samples but a {expected}-gap recharge series needs {needed}")]
    ObservedLengthMismatch {
        /// Number of observed samples supplied.
        observed: usize,
        /// Number of recharge gaps supplied.
        expected: usize,
        /// Required number of observed samples.
        needed: usize,
    },

    /// Returned when the first observed level, which seeds the simulated
    /// hydrograph, is missing.
    #[error("first observed level is missing; cannot seed the hydrograph")]
    MissingSeedLevel,

    /// Returned when an observed level is NaN or infinite.
    #[error("observed level is non-finite at index {index}")]
    NonFiniteObserved {
        /// Position of the offending sample.
        index: usize,
    },

    /// Returned when fewer than two observed levels are present.
    #[error("specific-yield calibration needs at least 2 observations, got {n}")]
    TooFewObservations {
        /// Number of present observations.
        n: usize,
    },

    /// Returned when the calibration's normal equation degenerates.
    #[error("specific-yield sensitivity vanished; the observations do not constrain it")]
    SingularSystem,

    /// Returned when the calibration fails to reach tolerance within the
    /// iteration budget.
    #[error("calibration did not converge within {iterations} iterations")]
    NotConverged {
        /// Iterations performed before giving up.
        iterations: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_forcing_length_mismatch() {
        let err = BudgetError::ForcingLengthMismatch {
            precip: 3,
            temp: 2,
            pet: 3,
        };
        assert_eq!(
            err.to_string(),
            "forcing lengths disagree: precip 3, temp 2, pet 3"
        );
    }

    #[test]
    fn error_non_finite_forcing() {
        let err = BudgetError::NonFiniteForcing {
            series: "precipitation",
            index: 4,
        };
        assert_eq!(err.to_string(), "precipitation is non-finite at index 4");
    }

    #[test]
    fn error_observed_length_mismatch() {
        let err = BudgetError::ObservedLengthMismatch {
            observed: 5,
            expected: 6,
            needed: 7,
        };
        assert_eq!(
            err.to_string(),
            "observed has 5 samples but a 6-gap recharge series needs 7"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<BudgetError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<BudgetError>();
    }
}
