//! Error types for the hydrec-recharge crate.

/// Error type for soil-profile construction and recharge computation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RechargeError {
    /// Returned when the profile has no layers.
    #[error("soil profile has no layers")]
    EmptyProfile,

    /// Returned when boundary and specific-yield counts disagree.
    #[error("profile needs {layers} + 1 boundaries, got {boundaries}")]
    BoundaryCountMismatch {
        /// Number of boundary depths supplied.
        boundaries: usize,
        /// Number of specific-yield values supplied.
        layers: usize,
    },

    /// Returned when the first boundary is not at the ground surface.
    #[error("first layer boundary must be 0 (ground surface), got {first}")]
    SurfaceNotZero {
        /// The rejected first boundary.
        first: f64,
    },

    /// Returned when boundary depths are not strictly increasing.
    #[error("layer boundaries are not strictly increasing at index {index}")]
    NonMonotonicBoundary {
        /// Position of the first offending boundary.
        index: usize,
    },

    /// Returned when a specific-yield value is outside `(0, 1]`.
    #[error("specific yield of layer {layer} must be in (0, 1], got {value}")]
    InvalidSpecificYield {
        /// Zero-based layer number.
        layer: usize,
        /// The rejected value.
        value: f64,
    },

    /// Returned when a water level is above the ground surface, which is a
    /// data-integrity problem for levels expressed below ground.
    #[error("water level {level} at index {index} is above the ground surface")]
    LevelAboveGround {
        /// Position of the offending sample.
        index: usize,
        /// The offending level (negative mbgs).
        level: f64,
    },

    /// Returned when a level or recession projection reaches the deepest
    /// profile boundary, leaving no layer to integrate over.
    #[error("water level {level} reaches below the deepest profile boundary ({max_depth})")]
    ProfileTooShallow {
        /// The offending depth.
        level: f64,
        /// Deepest boundary of the profile.
        max_depth: f64,
    },

    /// Returned when fewer than two samples are supplied.
    #[error("recharge needs at least 2 samples, got {n}")]
    TooFewSamples {
        /// Number of samples supplied.
        n: usize,
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

    /// Returned when a water level is NaN or infinite.
    #[error("water level is non-finite at index {index}")]
    NonFiniteLevel {
        /// Position of the offending sample.
        index: usize,
    },
}
