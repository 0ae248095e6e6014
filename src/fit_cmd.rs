use anyhow::{Context, Result};
use tracing::info;

use hydrec_extrema::detect_extrema;
use hydrec_io::{present, read_peak_indices, read_water_levels, write_series};
use hydrec_mrc::{MrcFit, RecessionSegments};

use crate::cli::FitMrcArgs;
use crate::config::HydrecConfig;
use crate::convert;

/// Run the `fit-mrc` subcommand.
pub fn run(args: FitMrcArgs, config: &HydrecConfig) -> Result<()> {
    let series = read_water_levels(&args.water_levels).with_context(|| {
        format!("failed to read water levels: {}", args.water_levels.display())
    })?;
    info!(samples = series.len(), "water levels loaded");

    let fit = calibrate(
        series.time(),
        series.levels(),
        args.peaks.as_deref(),
        args.window,
        args.linear,
        config,
    )?;

    println!("model:      {:?}", fit.model());
    println!("a:          {:.6} 1/day", fit.a());
    println!("b:          {:.6} m/day", fit.b());
    println!("rmse:       {:.6} m", fit.rmse());
    println!("iterations: {}", fit.iterations());

    if let Some(path) = &args.output {
        write_series(
            path,
            &[
                ("time", present(series.time())),
                ("observed", present(series.levels())),
                ("predicted", fit.predicted().to_vec()),
            ],
        )
        .with_context(|| format!("failed to write output: {}", path.display()))?;
        info!(path = %path.display(), "predicted levels written");
    }

    Ok(())
}

/// Shared calibration path: curated peaks or automatic detection, then the
/// Gauss-Newton fit.
pub fn calibrate(
    time: &[f64],
    levels: &[f64],
    peaks: Option<&std::path::Path>,
    window: Option<usize>,
    linear: bool,
    config: &HydrecConfig,
) -> Result<MrcFit> {
    let segments = match peaks {
        Some(path) => {
            let indices = read_peak_indices(path)
                .with_context(|| format!("failed to read peaks: {}", path.display()))?;
            info!(peaks = indices.len(), "using curated extrema");
            RecessionSegments::from_indices(levels, &indices)?
        }
        None => {
            let detect_config = convert::build_detect_config(config, window);
            let set = detect_extrema(levels, &detect_config)?;
            info!(
                extrema = set.len(),
                synthesized = set.added_ordinals().len(),
                window = detect_config.window(),
                "extrema detected"
            );
            RecessionSegments::from_extrema(levels, &set)?
        }
    };
    info!(segments = segments.len(), "recession segments paired");

    let spec = convert::build_mrc_spec(config, linear);
    let fit = spec.fit(time, levels, &segments)?;
    info!(
        a = fit.a(),
        b = fit.b(),
        rmse = fit.rmse(),
        iterations = fit.iterations(),
        "recession curve calibrated"
    );
    Ok(fit)
}
