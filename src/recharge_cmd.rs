use anyhow::{Context, Result};
use tracing::info;

use hydrec_io::{present, read_soil_profile, read_water_levels, write_series};
use hydrec_recharge::compute_recharge;

use crate::cli::RechargeArgs;
use crate::config::HydrecConfig;
use crate::fit_cmd;

/// Run the `recharge` subcommand.
pub fn run(args: RechargeArgs, config: &HydrecConfig) -> Result<()> {
    let series = read_water_levels(&args.water_levels).with_context(|| {
        format!("failed to read water levels: {}", args.water_levels.display())
    })?;
    let column = read_soil_profile(&args.soil)
        .with_context(|| format!("failed to read soil profile: {}", args.soil.display()))?;
    info!(
        samples = series.len(),
        layers = column.profile().n_layers(),
        "inputs loaded"
    );

    // Use the supplied recession parameters, or calibrate them first.
    let (a, b) = match (args.a, args.b) {
        (Some(a), Some(b)) => {
            info!(a, b, "using supplied recession parameters");
            (a, b)
        }
        _ => {
            let fit = fit_cmd::calibrate(
                series.time(),
                series.levels(),
                None,
                args.window,
                false,
                config,
            )?;
            (fit.a(), fit.b())
        }
    };

    let recharge = compute_recharge(series.time(), series.levels(), a, b, column.profile())?;
    let elapsed = series.time()[series.len() - 1] - series.time()[0];

    println!("days:            {}", recharge.len());
    println!("total recharge:  {:.4} m", recharge.total());
    println!("annualized:      {:.1} mm/year", recharge.annual_mm(elapsed));

    if let Some(path) = &args.output {
        write_series(
            path,
            &[
                ("time", present(&series.time()[1..])),
                ("recharge_m", present(recharge.values())),
            ],
        )
        .with_context(|| format!("failed to write output: {}", path.display()))?;
        info!(path = %path.display(), "recharge series written");
    }

    Ok(())
}
