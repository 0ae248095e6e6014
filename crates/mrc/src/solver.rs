//! Damped Gauss-Newton engine for MRC calibration.
//!
//! Minimizes the RMSE between observed and recession-integrated levels over
//! the segment-covered indices, with a numerically estimated Jacobian,
//! Marquardt-style diagonal scaling and damping, and step halving against
//! overshoot.
//!
//! **Not part of the public API.**

use tracing::debug;

use crate::config::FitConfig;
use crate::error::MrcError;
use crate::fit::MrcFit;
use crate::integrate::integrate_recession;
use crate::linalg;
use crate::segments::RecessionSegments;
use crate::spec::MrcModel;

/// Full fit pipeline:
/// 1. Validate series, segments, and in-segment levels
/// 2. Initialize `a = 0`, `b` = mean segment rise rate
/// 3. Iterate Gauss-Newton with Marquardt scaling until the parameter step
///    drops below tolerance (bounded by the configured iteration caps)
pub(crate) fn fit_mrc(
    model: MrcModel,
    config: &FitConfig,
    time: &[f64],
    levels: &[f64],
    segments: &RecessionSegments,
) -> Result<MrcFit, MrcError> {
    config.validate()?;

    // 1. Validate
    if time.len() != levels.len() {
        return Err(MrcError::LengthMismatch {
            time: time.len(),
            levels: levels.len(),
        });
    }
    for i in 1..time.len() {
        if time[i] <= time[i - 1] {
            return Err(MrcError::NonMonotonicTime { index: i });
        }
    }
    segments.validate(levels)?;

    let in_idx = segments.covered_indices();
    for &i in &in_idx {
        if !levels[i].is_finite() {
            return Err(MrcError::NonFiniteLevel { index: i });
        }
    }

    let dt: Vec<f64> = time.windows(2).map(|w| w[1] - w[0]).collect();
    let observed: Vec<f64> = in_idx.iter().map(|&i| levels[i]).collect();

    // 2. Initialize. The forward-difference step shares the convergence
    // tolerance.
    let step = config.tolerance();
    let n = model.n_params();
    let mut a = 0.0;
    let mut b = segments.mean_rise_rate(time, levels);

    let mut predicted = integrate_recession(a, b, levels, &dt, segments);
    let mut rmse = rmse_over(&observed, &predicted, &in_idx);
    debug!(a, b, rmse, "initial recession parameters");

    let mut iterations = 0usize;
    loop {
        if iterations == config.max_iterations() {
            return Err(MrcError::NotConverged { iterations });
        }
        iterations += 1;

        // 3. Forward-difference Jacobian over in-segment indices.
        // Parameter order: [a, b] in exponential mode, [b] alone in linear.
        let mut columns: Vec<Vec<f64>> = Vec::with_capacity(n);
        if model == MrcModel::Exponential {
            columns.push(bump_column(
                a + step,
                b,
                levels,
                &dt,
                segments,
                &predicted,
                &in_idx,
                step,
            ));
        }
        columns.push(bump_column(
            a,
            b + step,
            levels,
            &dt,
            segments,
            &predicted,
            &in_idx,
            step,
        ));

        let residuals: Vec<f64> = in_idx
            .iter()
            .map(|&i| levels[i] - predicted[i].expect("covered index"))
            .collect();

        // 4. Normal equations JtJ*delta = Jt*r with diagonal scaling so each
        // parameter's sensitivity is normalized.
        let mut jtj = [[0.0; 2]; 2];
        let mut jtr = [0.0; 2];
        for j in 0..n {
            for k in 0..n {
                jtj[j][k] = columns[j]
                    .iter()
                    .zip(columns[k].iter())
                    .map(|(x, y)| x * y)
                    .sum();
            }
            jtr[j] = columns[j]
                .iter()
                .zip(residuals.iter())
                .map(|(x, r)| x * r)
                .sum();
        }

        let mut scale = [0.0; 2];
        for j in 0..n {
            let d = jtj[j][j];
            if !d.is_finite() || d <= 0.0 {
                return Err(MrcError::SingularSystem);
            }
            scale[j] = 1.0 / d.sqrt();
        }

        let mut scaled = [[0.0; 2]; 2];
        let mut gradient = [0.0; 2];
        for j in 0..n {
            for k in 0..n {
                scaled[j][k] = scale[j] * jtj[j][k] * scale[k];
            }
            gradient[j] = scale[j] * jtr[j];
        }

        // 5. Marquardt search: grow the damping parameter until the solved
        // step points within the trust angle of the gradient. Guards against
        // ill-conditioned steps that would oscillate.
        let mut marquardt = 0.0;
        let mut delta = [0.0; 2];
        let mut within_angle = false;
        for _ in 0..config.max_marquardt_iterations() {
            let mut lhs = [[0.0; 2]; 2];
            for j in 0..n {
                for k in 0..n {
                    let damped = scaled[j][k] + if j == k { marquardt } else { 0.0 };
                    lhs[j][k] = damped / scale[k];
                }
            }
            delta = linalg::solve(n, lhs, gradient).ok_or(MrcError::SingularSystem)?;

            let den = linalg::dot(n, delta, delta) * linalg::dot(n, gradient, gradient);
            if den <= f64::EPSILON {
                // Vanishing gradient or step: already at a stationary point.
                within_angle = true;
                break;
            }
            let cos = linalg::dot(n, delta, gradient) / den.sqrt();
            if cos.abs() >= config.min_cos_angle() {
                within_angle = true;
                break;
            }
            marquardt = 1.5 * marquardt + 0.001;
        }
        if !within_angle {
            return Err(MrcError::NotConverged { iterations });
        }

        // 6. Apply the step, halving while the RMSE overshoots. The decay
        // coefficient is clipped at zero, never negative.
        let a_old = a;
        let b_old = b;
        let rmse_old = rmse;
        let mut settled = false;
        for _ in 0..config.max_damping_iterations() {
            match model {
                MrcModel::Exponential => {
                    a = (a_old + delta[0]).max(0.0);
                    b = b_old + delta[1];
                }
                MrcModel::Linear => {
                    b = b_old + delta[0];
                }
            }
            predicted = integrate_recession(a, b, levels, &dt, segments);
            rmse = rmse_over(&observed, &predicted, &in_idx);

            if rmse - rmse_old > config.overshoot_tolerance() {
                for d in delta.iter_mut() {
                    *d *= 0.5;
                }
            } else {
                settled = true;
                break;
            }
        }
        if !settled {
            return Err(MrcError::NotConverged { iterations });
        }

        // 7. Converged when the largest accepted parameter step is below
        // tolerance.
        let change = (a - a_old).abs().max((b - b_old).abs());
        debug!(iteration = iterations, a, b, rmse, change, "gauss-newton iteration");
        if change < config.tolerance() {
            break;
        }
    }

    Ok(MrcFit::new(model, a, b, rmse, predicted, iterations))
}

/// One forward-difference Jacobian column: the predicted-level response to a
/// bumped parameter, per in-segment index.
#[allow(clippy::too_many_arguments)]
fn bump_column(
    a: f64,
    b: f64,
    levels: &[f64],
    dt: &[f64],
    segments: &RecessionSegments,
    base: &[Option<f64>],
    in_idx: &[usize],
    step: f64,
) -> Vec<f64> {
    let bumped = integrate_recession(a, b, levels, dt, segments);
    in_idx
        .iter()
        .map(|&i| {
            (bumped[i].expect("covered index") - base[i].expect("covered index")) / step
        })
        .collect()
}

/// RMSE between observed levels and the defined entries of the predicted
/// series, over the segment-covered indices.
fn rmse_over(observed: &[f64], predicted: &[Option<f64>], in_idx: &[usize]) -> f64 {
    let defined: Vec<f64> = in_idx
        .iter()
        .map(|&i| predicted[i].expect("covered index"))
        .collect();
    hydrec_stats::rmse(observed, &defined)
}
