//! Statistical helper functions shared across the hydrec workspace.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Root-mean-square error between paired observed and predicted values.
///
/// Returns 0.0 if the slices are empty.
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn rmse(observed: &[f64], predicted: &[f64]) -> f64 {
    assert_eq!(
        observed.len(),
        predicted.len(),
        "rmse: observed and predicted must have the same length"
    );
    if observed.is_empty() {
        return 0.0;
    }
    let mse = observed
        .iter()
        .zip(predicted.iter())
        .map(|(&o, &p)| (o - p) * (o - p))
        .sum::<f64>()
        / observed.len() as f64;
    mse.sqrt()
}

/// Nash-Sutcliffe model efficiency coefficient.
///
/// 1.0 is a perfect match; 0.0 means the model predicts no better than the
/// observed mean. Returns `None` for empty input or when the observed series
/// is constant (zero denominator).
///
/// # Panics
///
/// Panics if the slices have different lengths.
pub fn nash_sutcliffe(observed: &[f64], predicted: &[f64]) -> Option<f64> {
    assert_eq!(
        observed.len(),
        predicted.len(),
        "nash_sutcliffe: observed and predicted must have the same length"
    );
    if observed.is_empty() {
        return None;
    }
    let obs_mean = mean(observed);
    let num: f64 = observed
        .iter()
        .zip(predicted.iter())
        .map(|(&o, &p)| (o - p) * (o - p))
        .sum();
    let den: f64 = observed
        .iter()
        .map(|&o| (o - obs_mean) * (o - obs_mean))
        .sum();
    if den <= 0.0 {
        return None;
    }
    Some(1.0 - num / den)
}
