// Sequential trial driver
//
// Prints each label before running it, times the run, and settles between
// trials. The output stream is a parameter so tests can capture the trace.

use std::io::Write;
use std::thread;
use std::time::Instant;

use log::{debug, trace};
use serde::Serialize;

use crate::context::TrialContext;
use crate::error::{BenchError, BenchResult};
use crate::trials::warmup::{self, WarmupReport};
use crate::trials::{Family, Trial};

pub const WARMUP_LABEL: &str = "z3_warm_up";

#[derive(Debug, Clone, Serialize)]
pub struct TrialOutcome {
    pub label: &'static str,
    pub family: Family,
    pub value: i64,
    pub elapsed_us: u64,
}

/// Advisory pause between trials. Nothing is collected; the thread only
/// yields so the next trial starts on a fresh timeslice.
pub fn settle() {
    trace!("settling between trials");
    thread::yield_now();
}

/// Keeps the trials named in `only`, in table order. An empty filter keeps
/// everything.
pub fn select(trials: Vec<Trial>, only: &[String]) -> BenchResult<Vec<Trial>> {
    if only.is_empty() {
        return Ok(trials);
    }
    if let Some(unknown) = only
        .iter()
        .find(|label| !trials.iter().any(|t| t.label == label.as_str()))
    {
        return Err(BenchError::UnknownTrial(unknown.clone()));
    }
    Ok(trials
        .into_iter()
        .filter(|t| only.iter().any(|label| label == t.label))
        .collect())
}

/// Runs every population trial so lookup trials find their shared
/// containers filled.
pub fn populate_shared(ctx: &mut TrialContext, trials: &[Trial]) -> BenchResult<()> {
    for trial in trials.iter().filter(|t| t.family == Family::Population) {
        (trial.run)(ctx)?;
    }
    Ok(())
}

pub fn run_warmup(ctx: &mut TrialContext, out: &mut dyn Write) -> BenchResult<WarmupReport> {
    writeln!(out, "{WARMUP_LABEL}")?;
    let start = Instant::now();
    let report = warmup::warm_up(ctx, out)?;
    debug!("{WARMUP_LABEL} took {:?}", start.elapsed());
    settle();
    Ok(report)
}

pub fn run_trials(
    ctx: &mut TrialContext,
    trials: &[Trial],
    out: &mut dyn Write,
) -> BenchResult<Vec<TrialOutcome>> {
    let mut outcomes = Vec::with_capacity(trials.len());
    for trial in trials {
        writeln!(out, "{}", trial.label)?;
        let start = Instant::now();
        let value = (trial.run)(ctx)?;
        let elapsed = start.elapsed();
        debug!("{} = {} in {:?}", trial.label, value, elapsed);
        settle();
        outcomes.push(TrialOutcome {
            label: trial.label,
            family: trial.family,
            value,
            elapsed_us: elapsed.as_micros() as u64,
        });
    }
    Ok(outcomes)
}

/// `results[0-N] = v0, v1, ..., vN`, or `None` when nothing ran.
pub fn results_line(outcomes: &[TrialOutcome]) -> Option<String> {
    let last = outcomes.len().checked_sub(1)?;
    let values: Vec<String> = outcomes.iter().map(|o| o.value.to_string()).collect();
    Some(format!("results[0-{last}] = {}", values.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trials::catalogue;

    fn only(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn select_keeps_table_order() {
        let picked = select(catalogue(), &only(&["c2_for_variables", "a1_concat_str"])).unwrap();
        let labels: Vec<_> = picked.iter().map(|t| t.label).collect();
        assert_eq!(labels, ["a1_concat_str", "c2_for_variables"]);
    }

    #[test]
    fn select_rejects_unknown_label() {
        let err = select(catalogue(), &only(&["a1_concat_str", "zz_nope"])).unwrap_err();
        assert!(matches!(err, BenchError::UnknownTrial(label) if label == "zz_nope"));
    }

    #[test]
    fn run_prints_labels_and_collects_values() {
        let mut ctx = TrialContext::new();
        let trials = select(catalogue(), &only(&["b3_byte_bui_to_string", "d2_access_field_small"]))
            .unwrap();
        let mut trace = Vec::new();
        let outcomes = run_trials(&mut ctx, &trials, &mut trace).unwrap();

        assert_eq!(
            String::from_utf8(trace).unwrap(),
            "b3_byte_bui_to_string\nd2_access_field_small\n"
        );
        assert_eq!(outcomes[0].value, 640_000);
        assert_eq!(outcomes[1].value, 0);
        assert_eq!(
            results_line(&outcomes).as_deref(),
            Some("results[0-1] = 640000, 0")
        );
    }

    #[test]
    fn lookups_succeed_once_shared_containers_are_populated() {
        let mut ctx = TrialContext::new();
        let trials = catalogue();
        populate_shared(&mut ctx, &trials).unwrap();
        for trial in trials.iter().filter(|t| t.family == Family::Lookup) {
            assert_eq!((trial.run)(&mut ctx).unwrap(), 64_000, "{}", trial.label);
        }
    }

    #[test]
    fn results_line_empty() {
        assert_eq!(results_line(&[]), None);
    }
}
