use anyhow::{Context, Result};
use tracing::{info, warn};

use hydrec_budget::{fit_specific_yield, surface_water_budget, SyFitConfig};
use hydrec_io::{present, read_water_levels, read_weather, write_series};

use crate::cli::BudgetArgs;
use crate::config::HydrecConfig;
use crate::convert;

/// Run the `budget` subcommand.
pub fn run(args: BudgetArgs, config: &HydrecConfig) -> Result<()> {
    let table = read_weather(&args.weather)
        .with_context(|| format!("failed to read weather: {}", args.weather.display()))?;
    info!(days = table.len(), "weather forcing loaded");

    let budget_config = convert::build_budget_config(config, &args);
    let output = surface_water_budget(&budget_config, table.forcing())?;

    let n = output.len();
    let elapsed_years = n as f64 / 365.25;
    let total_recharge: f64 = output.recharge().iter().sum();
    let total_runoff: f64 = output.runoff().iter().sum();
    let total_et: f64 = output.actual_et().iter().sum();

    println!("days:        {n}");
    println!("recharge:    {:.1} mm ({:.1} mm/year)", total_recharge, total_recharge / elapsed_years);
    println!("runoff:      {:.1} mm ({:.1} mm/year)", total_runoff, total_runoff / elapsed_years);
    println!("actual ET:   {:.1} mm ({:.1} mm/year)", total_et, total_et / elapsed_years);

    if let Some(path) = &args.output {
        write_series(
            path,
            &[
                ("day", present(&table.day_numbers())),
                ("recharge_mm", present(output.recharge())),
                ("runoff_mm", present(output.runoff())),
                ("actual_et_mm", present(output.actual_et())),
                ("storage_mm", present(output.storage())),
                ("snowpack_mm", present(output.snowpack())),
            ],
        )
        .with_context(|| format!("failed to write output: {}", path.display()))?;
        info!(path = %path.display(), "budget terms written");
    }

    if let Some(levels_path) = &args.water_levels {
        compare_hydrograph(&args, config, levels_path, output.recharge())?;
    }

    Ok(())
}

/// Calibrate the specific yield against observed levels and report how well
/// the budget-driven synthetic hydrograph matches them.
fn compare_hydrograph(
    args: &BudgetArgs,
    config: &HydrecConfig,
    levels_path: &std::path::Path,
    recharge_mm: &[f64],
) -> Result<()> {
    let (a, b) = match (args.a, args.b) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            warn!("no recession parameters given; skipping hydrograph comparison");
            return Ok(());
        }
    };

    let series = read_water_levels(levels_path)
        .with_context(|| format!("failed to read water levels: {}", levels_path.display()))?;

    // The hydrograph spans one level per weather day; the last budget day
    // carries no transfer, so it drives n-1 gaps. Levels are in meters.
    let n = recharge_mm.len();
    let recharge_m: Vec<f64> = recharge_mm[..n - 1].iter().map(|r| r / 1000.0).collect();

    // Align observations onto weather day numbers.
    let mut observed: Vec<Option<f64>> = vec![None; n];
    let mut outside = 0usize;
    for (&t, &level) in series.time().iter().zip(series.levels().iter()) {
        let day = t.round();
        if (t - day).abs() < 1e-6 && day >= 0.0 && (day as usize) < n {
            observed[day as usize] = Some(level);
        } else {
            outside += 1;
        }
    }
    if outside > 0 {
        warn!(outside, "observations outside the weather record were ignored");
    }

    let sy0 = args.specific_yield.unwrap_or(config.budget.specific_yield);
    let fit = fit_specific_yield(&observed, &recharge_m, a, b, sy0, &SyFitConfig::new())?;
    info!(sy = fit.sy(), rmse = fit.rmse(), "specific yield calibrated");

    let observed_present: Vec<f64> = observed.iter().flatten().copied().collect();
    let predicted_present: Vec<f64> = observed
        .iter()
        .enumerate()
        .filter(|(_, level)| level.is_some())
        .map(|(i, _)| fit.predicted()[i])
        .collect();
    let nse = hydrec_stats::nash_sutcliffe(&observed_present, &predicted_present);

    println!("specific yield:  {:.3}", fit.sy());
    println!("hydrograph rmse: {:.4} m", fit.rmse());
    match nse {
        Some(nse) => println!("nash-sutcliffe:  {nse:.3}"),
        None => println!("nash-sutcliffe:  n/a (constant observations)"),
    }

    Ok(())
}
