//! Error types for the hydrec-mrc crate.

/// Error type for recession-segment construction and MRC fitting.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MrcError {
    /// Returned when no extremum indices were supplied.
    #[error("no extrema selected")]
    NoExtrema,

    /// Returned when the extrema contain no complete (peak, recession end)
    /// pair.
    #[error("extrema contain no complete peak/recession-end pair")]
    NoSegments,

    /// Returned when a segment's starting peak is deeper than its recession
    /// end, which contradicts the peak/end pairing.
    #[error(
        "segment starting at index {max_index} is deeper than its recession end at index {min_index}"
    )]
    SegmentOrder {
        /// Index of the segment's peak.
        max_index: usize,
        /// Index of the segment's recession end.
        min_index: usize,
    },

    /// Returned when an extremum index lies outside the series.
    #[error("extremum index {index} is out of range for a series of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the level series.
        len: usize,
    },

    /// Returned when the time and level slices have different lengths.
    #[error("time has {time} samples but levels has {levels}")]
    LengthMismatch {
        /// Number of time samples.
        time: usize,
        /// Number of level samples.
        levels: usize,
    },

    /// Returned when the time axis is not strictly increasing.
    #[error("time is not strictly increasing at index {index}")]
    NonMonotonicTime {
        /// Position of the first non-increasing sample.
        index: usize,
    },

    /// Returned when an in-segment water level is NaN or infinite.
    #[error("water level inside a recession segment is non-finite at index {index}")]
    NonFiniteLevel {
        /// Position of the offending sample.
        index: usize,
    },

    /// Returned when a fit configuration parameter is invalid.
    #[error("invalid {parameter}: {value}")]
    InvalidConfig {
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Returned when the scaled normal equations are singular or have a
    /// non-positive diagonal.
    #[error("normal equations are singular; the segments do not constrain the parameters")]
    SingularSystem,

    /// Returned when the optimization fails to reach the step tolerance
    /// within the configured iteration budget.
    #[error("fit did not converge within {iterations} iterations")]
    NotConverged {
        /// Iterations performed before giving up.
        iterations: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_no_extrema() {
        assert_eq!(MrcError::NoExtrema.to_string(), "no extrema selected");
    }

    #[test]
    fn error_segment_order() {
        let err = MrcError::SegmentOrder {
            max_index: 4,
            min_index: 9,
        };
        assert_eq!(
            err.to_string(),
            "segment starting at index 4 is deeper than its recession end at index 9"
        );
    }

    #[test]
    fn error_length_mismatch() {
        let err = MrcError::LengthMismatch {
            time: 10,
            levels: 9,
        };
        assert_eq!(err.to_string(), "time has 10 samples but levels has 9");
    }

    #[test]
    fn error_not_converged() {
        let err = MrcError::NotConverged { iterations: 100 };
        assert_eq!(
            err.to_string(),
            "fit did not converge within 100 iterations"
        );
    }

    #[test]
    fn error_invalid_config() {
        let err = MrcError::InvalidConfig {
            parameter: "tolerance",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "invalid tolerance: -1");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<MrcError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<MrcError>();
    }
}
