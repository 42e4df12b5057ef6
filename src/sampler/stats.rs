use std::time::Duration;

use super::sample::SampleSet;

/// Summary statistics reduced from a completed [`SampleSet`].
///
/// Timing fields are milliseconds rounded to 2 decimal places and are
/// computed over successful trials only. When a run has zero successful
/// trials every timing field is 0.0 rather than NaN or an error.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub total_tests: u32,
    pub successful_tests: u32,
    pub failed_tests: u32,
    pub average_time: f64,
    pub min_time: f64,
    pub max_time: f64,
    pub median_time: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn to_millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Calculate the mean of the samples, in milliseconds
pub fn calculate_mean_ms(durations: &[Duration]) -> f64 {
    if durations.is_empty() {
        return 0.0;
    }

    let total: f64 = durations.iter().map(|d| to_millis(*d)).sum();
    total / durations.len() as f64
}

/// Calculate the upper median of the samples, in milliseconds.
///
/// This is the element at index `len / 2` after sorting ascending. For
/// even-sized inputs that is the upper of the two middle values, not their
/// average; callers rely on this convention.
pub fn calculate_median_ms(durations: &[Duration]) -> f64 {
    if durations.is_empty() {
        return 0.0;
    }

    let mut sorted: Vec<Duration> = durations.to_vec();
    sorted.sort();
    to_millis(sorted[sorted.len() / 2])
}

impl SummaryStats {
    /// Reduce a finalized sample set into summary statistics.
    pub fn from_sample_set(set: &SampleSet) -> Self {
        let successes = set.successful_durations();

        let (average_time, min_time, max_time, median_time) = if successes.is_empty() {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let min = successes.iter().min().copied().unwrap_or(Duration::ZERO);
            let max = successes.iter().max().copied().unwrap_or(Duration::ZERO);
            (
                round2(calculate_mean_ms(&successes)),
                round2(to_millis(min)),
                round2(to_millis(max)),
                round2(calculate_median_ms(&successes)),
            )
        };

        Self {
            total_tests: set.total(),
            successful_tests: set.successful(),
            failed_tests: set.failed(),
            average_time,
            min_time,
            max_time,
            median_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::sample::TrialOutcome;

    fn set_from(outcomes: &[TrialOutcome]) -> SampleSet {
        let mut set = SampleSet::new("test", outcomes.len() as u32);
        for outcome in outcomes {
            set.record(*outcome);
        }
        set
    }

    #[test]
    fn test_calculate_mean_ms() {
        let durations = vec![
            Duration::from_millis(100),
            Duration::from_millis(200),
            Duration::from_millis(300),
        ];
        assert_eq!(calculate_mean_ms(&durations), 200.0);
    }

    #[test]
    fn test_calculate_mean_ms_empty() {
        let durations: Vec<Duration> = vec![];
        assert_eq!(calculate_mean_ms(&durations), 0.0);
    }

    #[test]
    fn test_median_is_upper_median_for_even_sets() {
        let durations = vec![
            Duration::from_millis(10),
            Duration::from_millis(20),
            Duration::from_millis(30),
            Duration::from_millis(40),
        ];
        // Index 2 of the sorted set, not the 25.0 a textbook median would give.
        assert_eq!(calculate_median_ms(&durations), 30.0);
    }

    #[test]
    fn test_median_odd() {
        let durations = vec![
            Duration::from_millis(100),
            Duration::from_millis(300),
            Duration::from_millis(200),
        ];
        assert_eq!(calculate_median_ms(&durations), 200.0);
    }

    #[test]
    fn test_median_empty() {
        let durations: Vec<Duration> = vec![];
        assert_eq!(calculate_median_ms(&durations), 0.0);
    }

    #[test]
    fn test_stats_ignore_failed_trials() {
        let set = set_from(&[
            TrialOutcome::Success(Duration::from_millis(5)),
            TrialOutcome::Failed,
            TrialOutcome::Success(Duration::from_millis(15)),
        ]);
        let stats = SummaryStats::from_sample_set(&set);

        assert_eq!(stats.total_tests, 3);
        assert_eq!(stats.successful_tests, 2);
        assert_eq!(stats.failed_tests, 1);
        assert_eq!(stats.average_time, 10.0);
        assert_eq!(stats.min_time, 5.0);
        assert_eq!(stats.max_time, 15.0);
    }

    #[test]
    fn test_stats_all_failures_use_zero_sentinel() {
        let set = set_from(&[TrialOutcome::Failed, TrialOutcome::Failed]);
        let stats = SummaryStats::from_sample_set(&set);

        assert_eq!(stats.successful_tests, 0);
        assert_eq!(stats.failed_tests, 2);
        assert_eq!(stats.average_time, 0.0);
        assert_eq!(stats.min_time, 0.0);
        assert_eq!(stats.max_time, 0.0);
        assert_eq!(stats.median_time, 0.0);
    }

    #[test]
    fn test_stats_round_to_two_decimals() {
        let set = set_from(&[
            TrialOutcome::Success(Duration::from_micros(1111)),
            TrialOutcome::Success(Duration::from_micros(2222)),
            TrialOutcome::Success(Duration::from_micros(4444)),
        ]);
        let stats = SummaryStats::from_sample_set(&set);

        // (1.111 + 2.222 + 4.444) / 3 = 2.592333...
        assert_eq!(stats.average_time, 2.59);
        assert_eq!(stats.min_time, 1.11);
        assert_eq!(stats.max_time, 4.44);
        assert_eq!(stats.median_time, 2.22);
    }
}
