//! Fitted MRC results.

use crate::spec::MrcModel;

/// A calibrated Master Recession Curve produced by [`MrcSpec::fit()`].
///
/// Immutable record of the accepted parameters: the decay coefficient `a`
/// (1/day, zero in linear mode), the offset `b` (m/day), the RMSE of the
/// fit (meters, over in-segment indices), and the recession-integrated
/// level series (`None` outside segments). Callers persist or display it;
/// the fit never mutates shared state.
///
/// [`MrcSpec::fit()`]: crate::MrcSpec::fit
#[derive(Debug, Clone)]
pub struct MrcFit {
    model: MrcModel,
    a: f64,
    b: f64,
    rmse: f64,
    predicted: Vec<Option<f64>>,
    iterations: usize,
}

impl MrcFit {
    /// Creates a new `MrcFit` (crate-internal constructor).
    pub(crate) fn new(
        model: MrcModel,
        a: f64,
        b: f64,
        rmse: f64,
        predicted: Vec<Option<f64>>,
        iterations: usize,
    ) -> Self {
        Self {
            model,
            a,
            b,
            rmse,
            predicted,
            iterations,
        }
    }

    /// Returns the model kind this fit was produced under.
    pub fn model(&self) -> MrcModel {
        self.model
    }

    /// Returns the decay coefficient `a` in 1/day. Always `>= 0`; exactly 0
    /// in linear mode.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the offset `b` in m/day (rate of water-table decline).
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns the root-mean-square residual in meters, over in-segment
    /// indices only.
    pub fn rmse(&self) -> f64 {
        self.rmse
    }

    /// Returns the recession-integrated level series; `None` outside
    /// segments.
    pub fn predicted(&self) -> &[Option<f64>] {
        &self.predicted
    }

    /// Returns the number of Gauss-Newton iterations performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}
