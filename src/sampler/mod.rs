pub mod probe;
pub mod runner;
pub mod sample;
pub mod stats;

// Re-export commonly used items for convenience
pub use probe::AsyncProbe;
pub use runner::{ProgressSink, TracingProgress, run_sampling, run_sampling_with_progress};
pub use sample::{SampleSet, TrialOutcome};
pub use stats::SummaryStats;
