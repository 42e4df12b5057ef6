use std::time::Instant;

use super::probe::AsyncProbe;
use super::sample::{SampleSet, TrialOutcome};
use super::stats::SummaryStats;
use crate::error::{ProbeError, Result};

/// Receives periodic progress notifications during a sampling run.
///
/// Informational only; a sink has no effect on the recorded samples.
pub trait ProgressSink: Send + Sync {
    fn on_progress(&self, label: &str, completed: u32, total: u32);
}

/// Default sink that reports progress through tracing.
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn on_progress(&self, label: &str, completed: u32, total: u32) {
        tracing::info!("{}: completed {}/{} trials", label, completed, total);
    }
}

/// Run `trial_count` strictly sequential latency trials against `probe` and
/// reduce the outcomes to summary statistics.
///
/// Trials never overlap: trial N+1 starts only after trial N's outcome is
/// recorded, so each measurement is free of interference from concurrent
/// in-flight requests. A failed trial is logged, counted, and the run
/// continues; no per-trial error escapes this function. Progress is reported
/// after every 10th trial.
///
/// # Errors
///
/// Returns [`ProbeError::Configuration`] if `trial_count` is zero.
pub async fn run_sampling(
    probe: &dyn AsyncProbe,
    trial_count: u32,
    label: &str,
) -> Result<SummaryStats> {
    run_sampling_with_progress(probe, trial_count, label, &TracingProgress).await
}

/// Same as [`run_sampling`] but with a caller-supplied progress sink.
pub async fn run_sampling_with_progress(
    probe: &dyn AsyncProbe,
    trial_count: u32,
    label: &str,
    progress: &dyn ProgressSink,
) -> Result<SummaryStats> {
    if trial_count == 0 {
        return Err(ProbeError::Configuration(
            "trial count must be positive".to_string(),
        ));
    }

    let mut samples = SampleSet::new(label, trial_count);

    for trial in 1..=trial_count {
        let start = Instant::now();
        match probe.attempt().await {
            Ok(()) => {
                samples.record(TrialOutcome::Success(start.elapsed()));
            }
            Err(e) => {
                tracing::warn!("{} trial #{} failed: {}", samples.label(), trial, e);
                samples.record(TrialOutcome::Failed);
            }
        }

        if trial % 10 == 0 {
            progress.on_progress(label, trial, trial_count);
        }
    }

    Ok(SummaryStats::from_sample_set(&samples))
}
