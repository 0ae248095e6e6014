//! End-to-end MRC tests: synthetic recession data generated with known
//! parameters must be recovered by the fit, alone and through the full
//! detect -> pair -> fit pipeline.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use hydrec_extrema::{detect_extrema, DetectConfig};
use hydrec_mrc::{
    integrate_recession, recession_step, MrcModel, MrcSpec, RecessionSegments,
};

/// Two recessions from known parameters, separated by one recharge event.
/// Returns (time, levels); segments are (0, 40) and (41, 80).
fn two_recessions(a: f64, b: f64) -> (Vec<f64>, Vec<f64>) {
    let n = 81;
    let time: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let mut levels = vec![0.0; n];
    levels[0] = 1.0;
    for i in 0..40 {
        levels[i + 1] = recession_step(a, b, levels[i], 1.0);
    }
    levels[41] = 1.2; // sharp recharge event resets the level
    for i in 41..80 {
        levels[i + 1] = recession_step(a, b, levels[i], 1.0);
    }
    (time, levels)
}

#[test]
fn parameter_recovery_grid() {
    for &(a, b) in &[(0.02, 0.06), (0.05, 0.15), (0.1, 0.4)] {
        let (time, levels) = two_recessions(a, b);
        let segments = RecessionSegments::from_indices(&levels, &[0, 40, 41, 80]).unwrap();
        let fit = MrcSpec::new(MrcModel::Exponential)
            .fit(&time, &levels, &segments)
            .unwrap();
        assert!(
            (fit.a() - a).abs() < 2e-3,
            "a: expected {a}, got {}",
            fit.a()
        );
        assert!(
            (fit.b() - b).abs() < 2e-3,
            "b: expected {b}, got {}",
            fit.b()
        );
        assert!(fit.rmse() < 1e-4, "rmse = {}", fit.rmse());
    }
}

#[test]
fn detect_pair_fit_pipeline() {
    let (time, levels) = two_recessions(0.05, 0.15);

    let set = detect_extrema(&levels, &DetectConfig::new(5)).unwrap();
    let segments = RecessionSegments::from_extrema(&levels, &set).unwrap();
    assert_eq!(segments.pairs(), &[(0, 40), (41, 80)]);

    let fit = MrcSpec::new(MrcModel::Exponential)
        .fit(&time, &levels, &segments)
        .unwrap();
    assert!((fit.a() - 0.05).abs() < 2e-3, "a = {}", fit.a());
    assert!((fit.b() - 0.15).abs() < 2e-3, "b = {}", fit.b());
}

#[test]
fn noisy_levels_still_close() {
    let (time, mut levels) = two_recessions(0.05, 0.15);
    let mut rng = StdRng::seed_from_u64(42);
    for level in levels.iter_mut() {
        *level += rng.random_range(-0.002..0.002);
    }
    // Keep the segment endpoints consistent with the pairing invariant.
    let segments = RecessionSegments::from_indices(&levels, &[0, 40, 41, 80]).unwrap();
    let fit = MrcSpec::new(MrcModel::Exponential)
        .fit(&time, &levels, &segments)
        .unwrap();
    assert!((fit.a() - 0.05).abs() < 0.02, "a = {}", fit.a());
    assert!((fit.b() - 0.15).abs() < 0.06, "b = {}", fit.b());
    assert!(fit.rmse() < 0.01, "rmse = {}", fit.rmse());
}

#[test]
fn predicted_series_matches_integrator_output() {
    let (time, levels) = two_recessions(0.05, 0.15);
    let segments = RecessionSegments::from_indices(&levels, &[0, 40, 41, 80]).unwrap();
    let fit = MrcSpec::new(MrcModel::Exponential)
        .fit(&time, &levels, &segments)
        .unwrap();

    let dt: Vec<f64> = time.windows(2).map(|w| w[1] - w[0]).collect();
    let direct = integrate_recession(fit.a(), fit.b(), &levels, &dt, &segments);
    assert_eq!(fit.predicted().len(), direct.len());
    for (p, d) in fit.predicted().iter().zip(direct.iter()) {
        match (p, d) {
            (Some(x), Some(y)) => assert!((x - y).abs() < 1e-12),
            (None, None) => {}
            _ => panic!("presence mask mismatch"),
        }
    }
}

#[test]
fn rmse_reflects_model_mismatch() {
    // Linear fit on exponential data has a strictly worse residual than the
    // exponential fit.
    let (time, levels) = two_recessions(0.08, 0.3);
    let segments = RecessionSegments::from_indices(&levels, &[0, 40, 41, 80]).unwrap();
    let linear = MrcSpec::new(MrcModel::Linear)
        .fit(&time, &levels, &segments)
        .unwrap();
    let exponential = MrcSpec::new(MrcModel::Exponential)
        .fit(&time, &levels, &segments)
        .unwrap();
    assert!(linear.rmse() > exponential.rmse());
    assert_eq!(linear.a(), 0.0);
}
