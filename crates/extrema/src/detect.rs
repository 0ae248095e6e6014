//! Windowed local-extrema detection over a water-level series.
//!
//! Partitions a series into alternating water-table maxima (recharge peaks)
//! and minima (recession ends) at a chosen timescale. Levels are in meters
//! below ground surface, so a peak is a local *minimum* of the stored values
//! and a recession end a local *maximum*.

use tracing::{debug, warn};

use crate::config::{BoundaryPolicy, DetectConfig};
use crate::error::ExtremaError;
use crate::extremum::{ExtremaSet, Extremum, ExtremumKind};
use crate::plateau::PlateauMap;

/// First position of the smallest value on `series[lo..=hi]`.
///
/// Bounds are normalized if reversed (plateau midpoints can sit past the
/// current cursor).
fn shallowest_in(series: &[f64], lo: usize, hi: usize) -> usize {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let mut best = lo;
    for i in lo..=hi {
        if series[i] < series[best] {
            best = i;
        }
    }
    best
}

/// First position of the largest value on `series[lo..=hi]`.
fn deepest_in(series: &[f64], lo: usize, hi: usize) -> usize {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let mut best = lo;
    for i in lo..=hi {
        if series[i] > series[best] {
            best = i;
        }
    }
    best
}

/// Detects the local extrema of `series` at the timescale of
/// `config.window()` samples.
///
/// The scan walks a forward window from the current cursor, picks the
/// candidate peak (shallowest level) and candidate recession end (deepest
/// level), and validates each against the symmetric neighborhood one window
/// on either side of its plateau; a candidate that stays extreme there is
/// accepted. When both candidates validate in one scan, the one closer to
/// the cursor wins (the earlier index on ties). Accepted extrema alternate
/// in kind; when the scan produces two of the same kind in a row, or an
/// opposite extremum that does not improve on the previous one, a bridging
/// extremum of the opposite kind is synthesized over the intervening range
/// and reported in [`ExtremaSet::added_ordinals`].
///
/// Extrema on constant-value plateaus report the plateau midpoint.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`ExtremaError::InvalidWindow`] | `config.window() == 0` |
/// | [`ExtremaError::NonFinite`] | any sample is NaN or infinite |
///
/// A series with fewer than 2 samples yields an empty set, not an error.
pub fn detect_extrema(
    series: &[f64],
    config: &DetectConfig,
) -> Result<ExtremaSet, ExtremaError> {
    config.validate()?;
    if let Some(index) = series.iter().position(|v| !v.is_finite()) {
        return Err(ExtremaError::NonFinite { index });
    }
    if series.len() < 2 {
        return Ok(ExtremaSet::empty());
    }

    let n = series.len();
    let last = n - 1;
    let window = config.window();
    let plateaus = PlateauMap::build(series);

    let mut extrema: Vec<Extremum> = Vec::new();
    let mut added: Vec<usize> = Vec::new();
    let mut previous: Option<ExtremumKind> = None;
    let mut cursor = 0usize;

    // A pass normally advances the cursor, but a plateau straddling it can
    // momentarily move it backwards; the pass budget keeps degenerate inputs
    // from scanning forever.
    let mut passes_left = 8 * n + 8;

    while cursor < last {
        if passes_left == 0 {
            warn!(
                cursor,
                found = extrema.len(),
                "detection pass budget exhausted, returning partial partition"
            );
            break;
        }
        passes_left -= 1;

        let scan_end = (cursor + window).min(last);

        // Candidate peak: shallowest level in the forward window.
        let peak = shallowest_in(series, cursor, scan_end);
        let lo = plateaus.start(peak).saturating_sub(window);
        let hi = (plateaus.end(peak) + window).min(last);
        let mut peak_valid = shallowest_in(series, lo, hi) == peak;

        // Candidate recession end: deepest level in the forward window.
        let deep = deepest_in(series, cursor, scan_end);
        let lo = plateaus.start(deep).saturating_sub(window);
        let hi = (plateaus.end(deep) + window).min(last);
        let mut deep_valid = deepest_in(series, lo, hi) == deep;

        // Both valid in one scan: keep the one closer to the cursor.
        if peak_valid && deep_valid {
            if peak < deep {
                deep_valid = false;
            } else {
                peak_valid = false;
            }
        }

        match previous {
            None => {
                if deep_valid {
                    cursor = plateaus.start(deep) + 1;
                    previous = Some(ExtremumKind::Minimum);
                    extrema.push(Extremum::new(
                        plateaus.midpoint(deep),
                        ExtremumKind::Minimum,
                    ));
                } else if peak_valid {
                    cursor = plateaus.start(peak) + 1;
                    previous = Some(ExtremumKind::Maximum);
                    extrema.push(Extremum::new(
                        plateaus.midpoint(peak),
                        ExtremumKind::Maximum,
                    ));
                } else {
                    cursor += window;
                }
            }
            Some(ExtremumKind::Maximum) => {
                // Previous accepted extremum is a peak.
                let prev_index = extrema
                    .last()
                    .expect("a previous kind implies an accepted extremum")
                    .index;
                let prev_level = series[prev_index];

                if deep_valid {
                    if prev_level < series[deep] {
                        cursor = plateaus.start(deep) + 1;
                        previous = Some(ExtremumKind::Minimum);
                        extrema.push(Extremum::new(
                            plateaus.midpoint(deep),
                            ExtremumKind::Minimum,
                        ));
                    } else {
                        // The new low is no deeper than the previous peak:
                        // bridge with the deepest level in between.
                        let bridge = deepest_in(series, prev_index, deep);
                        cursor = plateaus.start(bridge) + 1;
                        previous = Some(ExtremumKind::Minimum);
                        extrema.push(Extremum::new(
                            plateaus.midpoint(bridge),
                            ExtremumKind::Minimum,
                        ));
                        added.push(extrema.len() - 1);
                    }
                } else if peak_valid {
                    // Two peaks in a row: synthesize the recession end in
                    // between and rescan so the pending peak is re-found.
                    cursor = plateaus.start(peak);
                    previous = Some(ExtremumKind::Minimum);
                    let bridge = deepest_in(series, prev_index, cursor);
                    extrema.push(Extremum::new(
                        plateaus.midpoint(bridge),
                        ExtremumKind::Minimum,
                    ));
                    added.push(extrema.len() - 1);
                } else {
                    cursor += window;
                }
            }
            Some(ExtremumKind::Minimum) => {
                // Previous accepted extremum is a recession end.
                let prev_index = extrema
                    .last()
                    .expect("a previous kind implies an accepted extremum")
                    .index;
                let prev_level = series[prev_index];

                if peak_valid {
                    if prev_level > series[peak] {
                        cursor = plateaus.start(peak) + 1;
                        previous = Some(ExtremumKind::Maximum);
                        extrema.push(Extremum::new(
                            plateaus.midpoint(peak),
                            ExtremumKind::Maximum,
                        ));
                    } else {
                        // The new peak is no shallower than the previous
                        // recession end: bridge with the shallowest level
                        // in between.
                        let bridge = shallowest_in(series, prev_index, peak);
                        cursor = plateaus.start(bridge) + 1;
                        previous = Some(ExtremumKind::Maximum);
                        extrema.push(Extremum::new(
                            plateaus.midpoint(bridge),
                            ExtremumKind::Maximum,
                        ));
                        added.push(extrema.len() - 1);
                    }
                } else if deep_valid {
                    // Two recession ends in a row: synthesize the peak in
                    // between and rescan.
                    cursor = plateaus.start(deep);
                    previous = Some(ExtremumKind::Maximum);
                    let bridge = shallowest_in(series, prev_index, cursor);
                    extrema.push(Extremum::new(
                        plateaus.midpoint(bridge),
                        ExtremumKind::Maximum,
                    ));
                    added.push(extrema.len() - 1);
                } else {
                    cursor += window;
                }
            }
        }
    }

    if config.boundaries() == BoundaryPolicy::Include {
        include_boundaries(last, &plateaus, &mut extrema, &mut added);
    }

    debug!(
        found = extrema.len(),
        synthesized = added.len(),
        "extrema detection complete"
    );
    Ok(ExtremaSet::new(extrema, added))
}

/// Forces both boundary samples into the partition.
///
/// A boundary outside the first/last extremum's plateau is inserted as a
/// synthesized extremum of opposite kind; a boundary inside that plateau
/// moves the extremum onto the boundary.
fn include_boundaries(
    last: usize,
    plateaus: &PlateauMap,
    extrema: &mut Vec<Extremum>,
    added: &mut Vec<usize>,
) {
    if extrema.is_empty() {
        return;
    }

    let first = extrema[0];
    if first.index > 0 {
        if plateaus.start(first.index) > 0 {
            extrema.insert(0, Extremum::new(0, first.kind.opposite()));
            for ordinal in added.iter_mut() {
                *ordinal += 1;
            }
            added.insert(0, 0);
        } else {
            extrema[0].index = 0;
        }
    }

    let tail = *extrema.last().expect("checked non-empty");
    if tail.index < last {
        if plateaus.end(tail.index) < last {
            extrema.push(Extremum::new(last, tail.kind.opposite()));
            added.push(extrema.len() - 1);
        } else {
            extrema.last_mut().expect("checked non-empty").index = last;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(set: &ExtremaSet) -> Vec<(usize, ExtremumKind)> {
        set.extrema().iter().map(|e| (e.index, e.kind)).collect()
    }

    #[test]
    fn window_zero_rejected() {
        let err = detect_extrema(&[1.0, 2.0], &DetectConfig::new(0)).unwrap_err();
        assert!(matches!(err, ExtremaError::InvalidWindow { window: 0 }));
    }

    #[test]
    fn non_finite_rejected() {
        let err =
            detect_extrema(&[1.0, f64::NAN, 2.0], &DetectConfig::new(1)).unwrap_err();
        assert!(matches!(err, ExtremaError::NonFinite { index: 1 }));
    }

    #[test]
    fn short_series_yields_empty_set() {
        assert!(detect_extrema(&[], &DetectConfig::new(2)).unwrap().is_empty());
        assert!(detect_extrema(&[1.0], &DetectConfig::new(2)).unwrap().is_empty());
    }

    #[test]
    fn deepening_then_rising_turning_point() {
        // Levels deepen to index 4 then rise: one peak at the start, one
        // recession end at the true turning point.
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 3.0];
        let set = detect_extrema(&x, &DetectConfig::new(2)).unwrap();
        assert_eq!(
            kinds(&set),
            vec![(0, ExtremumKind::Maximum), (4, ExtremumKind::Minimum)]
        );
        assert!(set.added_ordinals().is_empty());
    }

    #[test]
    fn tent_series_alternates() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 3.0, 2.0, 1.0, 0.0];
        let set = detect_extrema(&x, &DetectConfig::new(2)).unwrap();
        assert_eq!(
            kinds(&set),
            vec![
                (0, ExtremumKind::Maximum),
                (4, ExtremumKind::Minimum),
                (8, ExtremumKind::Maximum),
            ]
        );
    }

    #[test]
    fn plateau_extremum_reports_midpoint() {
        let x = [1.0, 2.0, 3.0, 3.0, 3.0, 2.0, 1.0];
        let set = detect_extrema(&x, &DetectConfig::new(2)).unwrap();
        assert_eq!(
            kinds(&set),
            vec![
                (0, ExtremumKind::Maximum),
                (3, ExtremumKind::Minimum),
                (6, ExtremumKind::Maximum),
            ]
        );
    }

    #[test]
    fn same_kind_scan_synthesizes_bridge() {
        // After the recession end at index 1, the dip at index 3 fails its
        // symmetric validation (index 5 is shallower), so the next valid
        // candidate is another recession end at index 4: a bridging peak is
        // synthesized at the shallowest point in between.
        let x = [0.0, 10.0, 3.0, 2.0, 9.0, 1.0, 8.0];
        let set = detect_extrema(&x, &DetectConfig::new(2)).unwrap();
        assert_eq!(
            kinds(&set),
            vec![
                (0, ExtremumKind::Maximum),
                (1, ExtremumKind::Minimum),
                (3, ExtremumKind::Maximum),
                (4, ExtremumKind::Minimum),
                (5, ExtremumKind::Maximum),
            ]
        );
        assert_eq!(set.added_ordinals(), &[2]);
    }

    #[test]
    fn alternation_holds_on_noisy_series() {
        // Deterministic wiggle with several scales of structure.
        let x: Vec<f64> = (0..200)
            .map(|i| {
                let t = i as f64;
                (t / 7.0).sin() * 3.0 + (t / 29.0).cos() * 5.0 + (t / 3.0).sin()
            })
            .collect();
        for window in [2usize, 4, 8] {
            let set = detect_extrema(&x, &DetectConfig::new(window)).unwrap();
            assert!(set.len() >= 2, "window {window} found too few extrema");
            for pair in set.extrema().windows(2) {
                assert_ne!(
                    pair[0].kind, pair[1].kind,
                    "kinds must alternate (window {window})"
                );
                assert!(pair[0].index <= pair[1].index, "chronological order");
            }
        }
    }

    #[test]
    fn boundary_include_appends_opposite_kind() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 3.0];
        let config = DetectConfig::new(2).with_boundaries(BoundaryPolicy::Include);
        let set = detect_extrema(&x, &config).unwrap();
        assert_eq!(
            kinds(&set),
            vec![
                (0, ExtremumKind::Maximum),
                (4, ExtremumKind::Minimum),
                (5, ExtremumKind::Maximum),
            ]
        );
        assert_eq!(set.added_ordinals(), &[2]);
    }

    #[test]
    fn boundary_include_moves_extremum_on_boundary_plateau() {
        // The trailing peak's plateau touches the series end, so Include
        // moves it onto the boundary instead of inserting a new entry.
        let x = [2.0, 2.0, 1.0, 0.0, 0.0];
        let config = DetectConfig::new(1).with_boundaries(BoundaryPolicy::Include);
        let set = detect_extrema(&x, &config).unwrap();
        assert_eq!(
            kinds(&set),
            vec![(0, ExtremumKind::Minimum), (4, ExtremumKind::Maximum)]
        );
        assert!(set.added_ordinals().is_empty());
    }

    #[test]
    fn constant_series_single_extremum() {
        // One big plateau: a single extremum at the midpoint, nothing else.
        let x = [3.0; 7];
        let set = detect_extrema(&x, &DetectConfig::new(2)).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.extrema()[0].index, 3);
    }
}
