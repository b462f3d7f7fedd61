// Idiom comparisons: string concatenation, byte extraction, scanning loops,
// field access and keyed containers.
//
// Run: cargo run --release --bin compare_idioms
// Prints each trial label before running it, then one line with every
// trial's accumulated result in table order.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use serde::Serialize;

use idiom_bench::driver::{results_line, run_trials, run_warmup, select, TrialOutcome};
use idiom_bench::trials::catalogue;
use idiom_bench::trials::warmup::WarmupReport;
use idiom_bench::TrialContext;

#[derive(Debug, Parser)]
#[command(author, version, about = "Compares string, accessor and keyed-container idioms")]
struct Cli {
    /// Run only the named trials (repeatable; table order is kept)
    #[arg(long, value_name = "LABEL")]
    only: Vec<String>,

    /// Skip the warm-up pass
    #[arg(long)]
    skip_warmup: bool,

    /// Print the selected trial labels and exit
    #[arg(long)]
    list: bool,

    /// Print results as JSON on stdout; the label trace goes to stderr
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    warmup: Option<WarmupReport>,
    outcomes: Vec<TrialOutcome>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let trials = select(catalogue(), &cli.only)?;
    if cli.list {
        for trial in &trials {
            println!("{}", trial.label);
        }
        return Ok(());
    }

    let mut trace: Box<dyn Write> = if cli.json {
        Box::new(io::stderr().lock())
    } else {
        Box::new(io::stdout().lock())
    };

    let mut ctx = TrialContext::new();
    let warmup = if cli.skip_warmup {
        None
    } else {
        Some(run_warmup(&mut ctx, &mut *trace).context("warm-up failed")?)
    };
    let outcomes = run_trials(&mut ctx, &trials, &mut *trace).context("trial run failed")?;

    if cli.json {
        drop(trace);
        let report = Report { warmup, outcomes };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(line) = results_line(&outcomes) {
        writeln!(trace, "{line}")?;
    }
    Ok(())
}
