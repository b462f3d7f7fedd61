// Parameter passing: reassigning a by-value parameter vs. copying it to a
// local, across four call paths and with/without inlining eligibility.
//
// Run: cargo run --release --bin compare_param_passing
// Prints accumulated milliseconds per variant for each call path, then the
// sign counter total.

use anyhow::{ensure, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use idiom_bench::dispatch::{run_all, PassingConfig, HEADER, NB_CALLS, NB_LOOPS};

#[derive(Debug, Parser)]
#[command(author, version, about = "Compares parameter reassignment across call paths")]
struct Cli {
    /// Calls per timed block
    #[arg(long, default_value_t = NB_CALLS)]
    calls: i64,

    /// Timed blocks per variant
    #[arg(long, default_value_t = NB_LOOPS)]
    loops: u32,

    /// Print the report as JSON instead of the table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    ensure!(cli.calls >= 0, "--calls must not be negative (got {})", cli.calls);

    let config = PassingConfig {
        calls: cli.calls,
        loops: cli.loops,
    };
    info!("{} calls x {} loops per variant", config.calls, config.loops);

    if !cli.json {
        println!("{HEADER}");
    }
    let report = run_all(&config);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for timings in &report.paths {
            println!("{}", timings.line());
        }
        println!("total = {}", report.total);
    }
    Ok(())
}
