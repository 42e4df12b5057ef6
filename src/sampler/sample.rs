use std::time::Duration;

/// Outcome of a single trial: the elapsed call time, or a failure marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialOutcome {
    Success(Duration),
    Failed,
}

/// Ordered record of every trial from one run against one target.
///
/// Outcomes are appended one at a time while the run is in flight and the set
/// is read-only once the run completes.
#[derive(Debug, Clone)]
pub struct SampleSet {
    label: String,
    outcomes: Vec<TrialOutcome>,
}

impl SampleSet {
    pub fn new(label: &str, trial_count: u32) -> Self {
        Self {
            label: label.to_string(),
            outcomes: Vec::with_capacity(trial_count as usize),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn record(&mut self, outcome: TrialOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn total(&self) -> u32 {
        self.outcomes.len() as u32
    }

    pub fn successful(&self) -> u32 {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, TrialOutcome::Success(_)))
            .count() as u32
    }

    pub fn failed(&self) -> u32 {
        self.total() - self.successful()
    }

    /// Elapsed times of the successful trials, in trial order.
    pub fn successful_durations(&self) -> Vec<Duration> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                TrialOutcome::Success(d) => Some(*d),
                TrialOutcome::Failed => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_partition_total() {
        let mut set = SampleSet::new("test", 5);
        set.record(TrialOutcome::Success(Duration::from_millis(10)));
        set.record(TrialOutcome::Failed);
        set.record(TrialOutcome::Success(Duration::from_millis(20)));
        set.record(TrialOutcome::Failed);
        set.record(TrialOutcome::Success(Duration::from_millis(30)));

        assert_eq!(set.total(), 5);
        assert_eq!(set.successful(), 3);
        assert_eq!(set.failed(), 2);
        assert_eq!(set.successful() + set.failed(), set.total());
    }

    #[test]
    fn test_successful_durations_skip_failures() {
        let mut set = SampleSet::new("test", 3);
        set.record(TrialOutcome::Failed);
        set.record(TrialOutcome::Success(Duration::from_millis(7)));
        set.record(TrialOutcome::Failed);

        assert_eq!(
            set.successful_durations(),
            vec![Duration::from_millis(7)]
        );
    }

    #[test]
    fn test_empty_set() {
        let set = SampleSet::new("empty", 0);
        assert_eq!(set.total(), 0);
        assert_eq!(set.successful(), 0);
        assert_eq!(set.failed(), 0);
        assert!(set.successful_durations().is_empty());
    }
}
