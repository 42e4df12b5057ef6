use std::time::Duration;

use crate::error::Result;
use crate::report::{self, TargetReport};
use crate::rpc::{BalanceProbe, Commitment, RpcTarget};
use crate::sampler::run_sampling;

pub const DEFAULT_TRIAL_COUNT: u32 = 100;
pub const DEFAULT_INTER_RUN_DELAY: Duration = Duration::from_millis(1000);

/// Account whose balance is probed when no override is given.
pub const DEFAULT_PUBKEY: &str = "CXPeim1wQMkcTvEHx9QdhgKREYYJD8bnaCCqPRwJ1to1";

/// Compares per-call latency across a list of RPC targets.
///
/// Targets run strictly one after another, separated by a fixed pause, so
/// the two runs never interleave pressure on shared client-side resources.
#[derive(Debug, Clone)]
pub struct SpeedTest {
    pub targets: Vec<RpcTarget>,
    pub pubkey: String,
    pub trial_count: u32,
    pub inter_run_delay: Duration,
}

impl Default for SpeedTest {
    fn default() -> Self {
        Self {
            targets: vec![
                RpcTarget::new(
                    "https://api.mainnet-beta.solana.com",
                    Commitment::Confirmed,
                    "Mainnet RPC",
                ),
                RpcTarget::new(
                    "https://mainnet.chainbuff.com",
                    Commitment::Processed,
                    "Chainbuff RPC",
                ),
            ],
            pubkey: DEFAULT_PUBKEY.to_string(),
            trial_count: DEFAULT_TRIAL_COUNT,
            inter_run_delay: DEFAULT_INTER_RUN_DELAY,
        }
    }
}

impl SpeedTest {
    pub fn with_targets(targets: Vec<RpcTarget>, pubkey: &str, trial_count: u32) -> Self {
        Self {
            targets,
            pubkey: pubkey.to_string(),
            trial_count,
            ..Self::default()
        }
    }

    /// Run the sampler once per target and render the comparison.
    ///
    /// Only configuration errors propagate; individual call failures are
    /// absorbed into the per-target statistics.
    pub async fn run(&self) -> Result<Vec<TargetReport>> {
        tracing::info!("Starting RPC speed test...");

        let mut reports = Vec::new();

        for (index, target) in self.targets.iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(self.inter_run_delay).await;
            }

            tracing::info!("Testing {}...", target.label);
            let probe = BalanceProbe::new(target.clone(), &self.pubkey);
            let stats = run_sampling(&probe, self.trial_count, &target.label).await?;
            reports.push(TargetReport {
                target: target.clone(),
                stats,
            });
        }

        report::print_comparison(&reports);

        Ok(reports)
    }
}
