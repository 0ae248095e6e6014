//! Integration tests: recharge computed against a calibrated recession
//! model over a multi-event hydrograph.

use hydrec_extrema::{detect_extrema, DetectConfig};
use hydrec_mrc::{recession_step, MrcModel, MrcSpec, RecessionSegments};
use hydrec_recharge::{compute_recharge, SoilProfile};

/// Hydrograph alternating recessions and sharp recharge events, generated
/// from known parameters. Events at indices 21 and 43.
fn event_hydrograph(a: f64, b: f64) -> (Vec<f64>, Vec<f64>) {
    let n = 61;
    let time: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let mut levels = vec![0.0; n];
    levels[0] = 2.0;
    for i in 0..n - 1 {
        levels[i + 1] = recession_step(a, b, levels[i], 1.0);
        if i == 20 || i == 42 {
            // Recharge event: 0.8 m of rise on top of the recession step.
            levels[i + 1] -= 0.8;
        }
    }
    (time, levels)
}

#[test]
fn fitted_model_gives_zero_recharge_on_recession_days() {
    let (time, levels) = event_hydrograph(0.05, 0.2);

    let set = detect_extrema(&levels, &DetectConfig::new(4)).unwrap();
    let segments = RecessionSegments::from_extrema(&levels, &set).unwrap();
    let fit = MrcSpec::new(MrcModel::Exponential)
        .fit(&time, &levels, &segments)
        .unwrap();

    let profile = SoilProfile::new(vec![0.0, 10.0], vec![0.25]).unwrap();
    let series = compute_recharge(&time, &levels, fit.a(), fit.b(), &profile).unwrap();

    assert_eq!(series.len(), levels.len() - 1);
    for (i, &value) in series.values().iter().enumerate() {
        if i == 20 || i == 42 {
            // Event days: 0.8 m of rise beyond recession at Sy 0.25.
            assert!(
                (value - 0.8 * 0.25).abs() < 5e-3,
                "day {i}: expected ~0.2, got {value}"
            );
        } else {
            assert!(
                value.abs() < 1e-3,
                "day {i}: recession-only day should be ~0, got {value}"
            );
        }
    }
}

#[test]
fn sign_consistency_against_projection() {
    let (time, levels) = event_hydrograph(0.05, 0.2);
    let profile = SoilProfile::new(vec![0.0, 10.0], vec![0.25]).unwrap();
    let series = compute_recharge(&time, &levels, 0.05, 0.2, &profile).unwrap();

    for i in 0..series.len() {
        let projected = recession_step(0.05, 0.2, levels[i], 1.0).max(0.0);
        let observed = levels[i + 1];
        let value = series.values()[i];
        if observed < projected {
            assert!(value > 0.0, "day {i}: rise beyond projection must be positive");
        } else if observed > projected {
            assert!(value < 0.0, "day {i}: fall beyond projection must be negative");
        } else {
            assert_eq!(value, 0.0);
        }
    }
}

#[test]
fn annualized_total_matches_event_sum() {
    let (time, levels) = event_hydrograph(0.05, 0.2);
    let profile = SoilProfile::new(vec![0.0, 10.0], vec![0.25]).unwrap();
    let series = compute_recharge(&time, &levels, 0.05, 0.2, &profile).unwrap();

    // Two 0.8 m events at Sy 0.25: 0.4 m total.
    assert!((series.total() - 0.4).abs() < 1e-9);
    let elapsed = time.last().unwrap() - time.first().unwrap();
    let annual = series.annual_mm(elapsed);
    assert!((annual - 0.4 * 1000.0 / 60.0 * 365.25).abs() < 1e-6);
}

#[test]
fn uniform_profile_equals_single_layer() {
    // Splitting a homogeneous column into many layers must not change the
    // integral.
    let (time, levels) = event_hydrograph(0.05, 0.2);
    let single = SoilProfile::new(vec![0.0, 10.0], vec![0.25]).unwrap();
    let split = SoilProfile::new(
        vec![0.0, 0.5, 1.0, 2.0, 3.5, 5.0, 10.0],
        vec![0.25; 6],
    )
    .unwrap();

    let a = compute_recharge(&time, &levels, 0.05, 0.2, &single).unwrap();
    let b = compute_recharge(&time, &levels, 0.05, 0.2, &split).unwrap();
    for (x, y) in a.values().iter().zip(b.values().iter()) {
        assert!((x - y).abs() < 1e-9, "{x} vs {y}");
    }
}
