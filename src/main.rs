mod budget_cmd;
mod cli;
mod config;
mod convert;
mod fit_cmd;
mod logging;
mod recharge_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::HydrecConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = HydrecConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::FitMrc(args) => fit_cmd::run(args, &config),
        Command::Recharge(args) => recharge_cmd::run(args, &config),
        Command::Budget(args) => budget_cmd::run(args, &config),
    }
}
