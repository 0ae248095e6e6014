use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hydrec groundwater hydrograph toolkit.
#[derive(Parser)]
#[command(
    name = "hydrec",
    version,
    about = "Groundwater recharge estimation from well hydrographs"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file providing flag defaults.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Calibrate the master recession curve from observed water levels.
    FitMrc(FitMrcArgs),
    /// Estimate groundwater recharge from water levels and a soil profile.
    Recharge(RechargeArgs),
    /// Run the daily surface water budget from weather forcing.
    Budget(BudgetArgs),
}

/// Arguments for the `fit-mrc` subcommand.
#[derive(clap::Args)]
pub struct FitMrcArgs {
    /// Path to the water-level CSV file (time,level in day numbers / mbgs).
    #[arg(short, long)]
    pub water_levels: PathBuf,

    /// Extrema detection window in samples (overrides config).
    #[arg(long)]
    pub window: Option<usize>,

    /// CSV file of manually curated extremum indices (one `index` column);
    /// skips automatic detection.
    #[arg(long)]
    pub peaks: Option<PathBuf>,

    /// Fit the linear recession model (decay pinned at zero).
    #[arg(long)]
    pub linear: bool,

    /// Write observed and predicted levels to this CSV path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `recharge` subcommand.
#[derive(clap::Args)]
pub struct RechargeArgs {
    /// Path to the water-level CSV file (time,level).
    #[arg(short, long)]
    pub water_levels: PathBuf,

    /// Path to the tab-delimited soil-profile file.
    #[arg(short, long)]
    pub soil: PathBuf,

    /// Recession decay coefficient (1/day); fitted when not given.
    #[arg(long)]
    pub a: Option<f64>,

    /// Recession offset (m/day); fitted when not given.
    #[arg(long)]
    pub b: Option<f64>,

    /// Extrema detection window for the implicit fit (overrides config).
    #[arg(long)]
    pub window: Option<usize>,

    /// Write the daily recharge series to this CSV path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `budget` subcommand.
#[derive(clap::Args)]
pub struct BudgetArgs {
    /// Path to the weather CSV file (year,month,day,tavg,ptot,etp).
    #[arg(long)]
    pub weather: PathBuf,

    /// Runoff coefficient in [0, 1] (overrides config).
    #[arg(long)]
    pub runoff_coeff: Option<f64>,

    /// Readily-available storage capacity in mm (overrides config).
    #[arg(long)]
    pub max_storage: Option<f64>,

    /// Water-level CSV for synthetic-hydrograph comparison; day numbers
    /// must count from the first weather day.
    #[arg(short, long)]
    pub water_levels: Option<PathBuf>,

    /// Initial specific yield for the comparison (overrides config).
    #[arg(long)]
    pub specific_yield: Option<f64>,

    /// Recession decay coefficient for the comparison (1/day).
    #[arg(long)]
    pub a: Option<f64>,

    /// Recession offset for the comparison (m/day).
    #[arg(long)]
    pub b: Option<f64>,

    /// Write the daily budget terms to this CSV path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
