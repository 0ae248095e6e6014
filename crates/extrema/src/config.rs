//! Configuration for extrema detection.

use crate::error::ExtremaError;

/// Policy for extrema at the very first and last samples of the series.
///
/// The detector's windowed scan treats boundary samples like any other, so a
/// monotonic lead-in still produces a boundary extremum; this policy controls
/// the additional post-processing step that *forces* both boundaries into the
/// partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// No boundary post-processing.
    #[default]
    Exclude,
    /// Force both boundary samples into the partition: a boundary outside
    /// the first/last extremum's plateau is inserted as a synthesized
    /// extremum of opposite kind; a boundary inside that plateau moves the
    /// extremum onto the boundary.
    Include,
}

/// Configuration for a detection pass.
///
/// # Example
///
/// ```
/// use hydrec_extrema::{BoundaryPolicy, DetectConfig};
///
/// let config = DetectConfig::new(4).with_boundaries(BoundaryPolicy::Include);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DetectConfig {
    /// Timescale of the partition, in samples.
    window: usize,
    /// Boundary handling policy.
    boundaries: BoundaryPolicy,
}

impl DetectConfig {
    /// Creates a configuration with the given window width (in samples).
    ///
    /// Default boundary policy is [`BoundaryPolicy::Exclude`].
    pub fn new(window: usize) -> Self {
        Self {
            window,
            boundaries: BoundaryPolicy::Exclude,
        }
    }

    /// Sets the boundary handling policy.
    pub fn with_boundaries(mut self, boundaries: BoundaryPolicy) -> Self {
        self.boundaries = boundaries;
        self
    }

    /// Returns the window width in samples.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Returns the boundary handling policy.
    pub fn boundaries(&self) -> BoundaryPolicy {
        self.boundaries
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the window is zero.
    pub fn validate(&self) -> Result<(), ExtremaError> {
        if self.window == 0 {
            return Err(ExtremaError::InvalidWindow {
                window: self.window,
            });
        }
        Ok(())
    }
}
