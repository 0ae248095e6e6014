//! Recession segment pairing and validation.

use tracing::debug;

use hydrec_extrema::ExtremaSet;

use crate::error::MrcError;

/// Ordered (peak, recession end) index pairs delimiting the periods where
/// the water level recedes.
///
/// Pairs are carved from a sorted extremum index sequence by even/odd
/// position: the sequence must start with a peak and alternate, which the
/// detector guarantees and hand-edited input must honor. Each pair must
/// satisfy `levels[peak] <= levels[end]` (levels are meters below ground
/// surface, so the recession end is the larger value); a violation
/// invalidates the whole set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecessionSegments {
    pairs: Vec<(usize, usize)>,
}

impl RecessionSegments {
    /// Builds segments from a flat extremum index sequence.
    ///
    /// Indices are sorted; a trailing unpaired index is dropped (with a
    /// debug log), as are zero-length pairs. The `levels` slice is used to
    /// validate the peak/end ordering of every pair.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`MrcError::NoExtrema`] | `indices` is empty |
    /// | [`MrcError::IndexOutOfRange`] | any index `>= levels.len()` |
    /// | [`MrcError::NoSegments`] | no complete pair remains |
    /// | [`MrcError::SegmentOrder`] | a peak is deeper than its end |
    pub fn from_indices(levels: &[f64], indices: &[usize]) -> Result<Self, MrcError> {
        if indices.is_empty() {
            return Err(MrcError::NoExtrema);
        }

        let mut sorted = indices.to_vec();
        sorted.sort_unstable();

        if sorted.len() % 2 != 0 {
            let dropped = sorted.pop().expect("odd length implies non-empty");
            debug!(index = dropped, "dropping trailing unpaired extremum");
        }

        let mut pairs = Vec::with_capacity(sorted.len() / 2);
        for chunk in sorted.chunks_exact(2) {
            let (max_index, min_index) = (chunk[0], chunk[1]);
            if max_index == min_index {
                debug!(index = max_index, "dropping zero-length segment");
                continue;
            }
            pairs.push((max_index, min_index));
        }
        if pairs.is_empty() {
            return Err(MrcError::NoSegments);
        }

        let segments = Self { pairs };
        segments.validate(levels)?;
        Ok(segments)
    }

    /// Builds segments from a detector output set.
    pub fn from_extrema(levels: &[f64], extrema: &ExtremaSet) -> Result<Self, MrcError> {
        Self::from_indices(levels, &extrema.indices())
    }

    /// Checks every pair against a level series: indices in range and
    /// `levels[peak] <= levels[end]`.
    pub fn validate(&self, levels: &[f64]) -> Result<(), MrcError> {
        for &(max_index, min_index) in &self.pairs {
            if min_index >= levels.len() {
                return Err(MrcError::IndexOutOfRange {
                    index: min_index,
                    len: levels.len(),
                });
            }
            if levels[max_index] > levels[min_index] {
                return Err(MrcError::SegmentOrder {
                    max_index,
                    min_index,
                });
            }
        }
        Ok(())
    }

    /// Returns the (peak, end) pairs in chronological order.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there are no segments.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns every series index covered by a segment, in order.
    pub fn covered_indices(&self) -> Vec<usize> {
        let mut out = Vec::new();
        for &(max_index, min_index) in &self.pairs {
            out.extend(max_index..=min_index);
        }
        out
    }

    /// Mean level rise rate across the segments, in meters per day:
    /// `mean((levels[end] - levels[peak]) / (time[end] - time[peak]))`.
    ///
    /// Positive when the table declines (mbgs values grow) over the
    /// segments. The initial guess for the recession offset parameter.
    pub fn mean_rise_rate(&self, time: &[f64], levels: &[f64]) -> f64 {
        let sum: f64 = self
            .pairs
            .iter()
            .map(|&(max_index, min_index)| {
                (levels[max_index] - levels[min_index]) / (time[max_index] - time[min_index])
            })
            .sum();
        sum / self.pairs.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydrec_extrema::{DetectConfig, detect_extrema};

    #[test]
    fn empty_indices_rejected() {
        let err = RecessionSegments::from_indices(&[1.0, 2.0], &[]).unwrap_err();
        assert!(matches!(err, MrcError::NoExtrema));
    }

    #[test]
    fn single_index_has_no_pair() {
        let err = RecessionSegments::from_indices(&[1.0, 2.0, 3.0], &[1]).unwrap_err();
        assert!(matches!(err, MrcError::NoSegments));
    }

    #[test]
    fn trailing_unpaired_index_dropped() {
        let levels = [1.0, 1.2, 1.4, 1.2, 1.0];
        let segments = RecessionSegments::from_indices(&levels, &[0, 2, 4]).unwrap();
        assert_eq!(segments.pairs(), &[(0, 2)]);
    }

    #[test]
    fn indices_are_sorted_before_pairing() {
        let levels = [1.0, 1.2, 1.4, 1.2, 1.0, 1.3];
        let segments = RecessionSegments::from_indices(&levels, &[2, 0, 5, 4]).unwrap();
        assert_eq!(segments.pairs(), &[(0, 2), (4, 5)]);
    }

    #[test]
    fn out_of_range_index_rejected() {
        let err = RecessionSegments::from_indices(&[1.0, 2.0], &[0, 5]).unwrap_err();
        assert!(matches!(err, MrcError::IndexOutOfRange { index: 5, len: 2 }));
    }

    #[test]
    fn inverted_pair_rejected() {
        // Peak deeper than its recession end.
        let levels = [2.0, 1.5, 1.0];
        let err = RecessionSegments::from_indices(&levels, &[0, 2]).unwrap_err();
        assert!(matches!(
            err,
            MrcError::SegmentOrder {
                max_index: 0,
                min_index: 2
            }
        ));
    }

    #[test]
    fn zero_length_pairs_dropped() {
        let levels = [1.0, 1.2, 1.4, 1.6];
        let segments = RecessionSegments::from_indices(&levels, &[1, 1, 2, 3]).unwrap();
        assert_eq!(segments.pairs(), &[(2, 3)]);

        let err = RecessionSegments::from_indices(&levels, &[1, 1]).unwrap_err();
        assert!(matches!(err, MrcError::NoSegments));
    }

    #[test]
    fn covered_indices_spans_pairs() {
        let levels = [1.0, 1.2, 1.4, 1.2, 1.0, 1.3, 1.5];
        let segments = RecessionSegments::from_indices(&levels, &[0, 2, 4, 6]).unwrap();
        assert_eq!(segments.covered_indices(), vec![0, 1, 2, 4, 5, 6]);
    }

    #[test]
    fn mean_rise_rate_hand_computed() {
        let time = [0.0, 1.0, 2.0, 3.0, 4.0];
        let levels = [1.0, 1.2, 1.4, 1.2, 1.0];
        let segments = RecessionSegments::from_indices(&levels, &[0, 2]).unwrap();
        // (1.0 - 1.4) / (0 - 2) = 0.2 m/day of decline.
        assert!((segments.mean_rise_rate(&time, &levels) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn from_detected_extrema() {
        let levels = [1.0, 1.2, 1.4, 1.2, 1.0];
        let set = detect_extrema(&levels, &DetectConfig::new(1)).unwrap();
        let segments = RecessionSegments::from_extrema(&levels, &set).unwrap();
        assert_eq!(segments.pairs(), &[(0, 2)]);
    }
}
