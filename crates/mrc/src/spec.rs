//! MRC model specification (unfitted).

use crate::config::FitConfig;
use crate::error::MrcError;
use crate::fit::MrcFit;
use crate::segments::RecessionSegments;

/// Master Recession Curve equation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MrcModel {
    /// `dh/dt = b` — constant decline; the decay coefficient `a` is pinned
    /// at zero and only `b` is optimized.
    Linear,
    /// `dh/dt = -a*h + b` — decline slows as the table deepens; both
    /// parameters are optimized.
    Exponential,
}

impl MrcModel {
    /// Returns the number of free parameters under this model.
    pub fn n_params(self) -> usize {
        match self {
            MrcModel::Linear => 1,
            MrcModel::Exponential => 2,
        }
    }
}

/// An unfitted MRC specification.
///
/// Entry point of the fit workflow: pick the model kind, optionally adjust
/// the [`FitConfig`], then call [`MrcSpec::fit()`] to obtain an [`MrcFit`].
///
/// # Workflow
///
/// ```mermaid
/// graph LR
///     A["MrcSpec::new(model)"] -->|".fit(time, levels, &segments)?"| B["MrcFit"]
/// ```
#[derive(Debug, Clone)]
pub struct MrcSpec {
    model: MrcModel,
    config: FitConfig,
}

impl MrcSpec {
    /// Creates a specification for the given model kind with the default
    /// [`FitConfig`].
    pub fn new(model: MrcModel) -> Self {
        Self {
            model,
            config: FitConfig::new(),
        }
    }

    /// Replaces the fit configuration.
    pub fn with_config(mut self, config: FitConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the model kind.
    pub fn model(&self) -> MrcModel {
        self.model
    }

    /// Returns the fit configuration.
    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    /// Calibrates the recession parameters against observed levels over the
    /// given segments, via damped Gauss-Newton.
    ///
    /// `time` is in days (strictly increasing), `levels` in meters below
    /// ground surface. The fit minimizes the RMSE between observed and
    /// recession-integrated levels over in-segment indices.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`MrcError::LengthMismatch`] | `time.len() != levels.len()` |
    /// | [`MrcError::NonMonotonicTime`] | time not strictly increasing |
    /// | [`MrcError::IndexOutOfRange`] | segments exceed the series |
    /// | [`MrcError::SegmentOrder`] | a peak deeper than its end |
    /// | [`MrcError::NonFiniteLevel`] | NaN/infinite in-segment level |
    /// | [`MrcError::SingularSystem`] | normal equations singular |
    /// | [`MrcError::NotConverged`] | an iteration cap was reached |
    pub fn fit(
        &self,
        time: &[f64],
        levels: &[f64],
        segments: &RecessionSegments,
    ) -> Result<MrcFit, MrcError> {
        crate::solver::fit_mrc(self.model, &self.config, time, levels, segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn n_params_per_model() {
        assert_eq!(MrcModel::Linear.n_params(), 1);
        assert_eq!(MrcModel::Exponential.n_params(), 2);
    }

    #[test]
    fn spec_round_trip() {
        let spec = MrcSpec::new(MrcModel::Linear);
        assert_eq!(spec.model(), MrcModel::Linear);
        assert_eq!(spec.config().max_iterations(), 100);
    }

    #[test]
    fn spec_with_config() {
        let spec = MrcSpec::new(MrcModel::Exponential)
            .with_config(FitConfig::new().with_max_iterations(5));
        assert_eq!(spec.config().max_iterations(), 5);
    }

    #[test]
    fn fit_rejects_length_mismatch() {
        let levels = [1.0, 1.2, 1.4];
        let segments = RecessionSegments::from_indices(&levels, &[0, 2]).unwrap();
        let err = MrcSpec::new(MrcModel::Linear)
            .fit(&[0.0, 1.0], &levels, &segments)
            .unwrap_err();
        assert!(matches!(err, MrcError::LengthMismatch { time: 2, levels: 3 }));
    }
}
