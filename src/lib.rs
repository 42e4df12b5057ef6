pub use crate::error::{ProbeError, Result};
pub use crate::orchestrator::SpeedTest;
pub use crate::report::TargetReport;
pub use crate::rpc::{BalanceProbe, Commitment, RpcTarget};
pub use crate::sampler::{AsyncProbe, SummaryStats, run_sampling};

use tracing_subscriber::{filter::EnvFilter, fmt::Layer, prelude::*, registry::Registry};

pub mod error;
pub mod orchestrator;
pub mod report;
pub mod rpc;
pub mod sampler;
pub mod wallet;

/// Configure tracing output for the CLI binaries.
///
/// Respects `RUST_LOG`, defaulting to `info`. Safe to call more than once;
/// later calls are no-ops.
pub fn init_tracing() {
    let stdout_layer = Layer::new().with_ansi(true).with_target(true);

    let _ = Registry::default()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(stdout_layer)
        .try_init();
}
