use crate::rpc::RpcTarget;
use crate::sampler::SummaryStats;

/// Statistics for one target, paired with the target they were measured
/// against.
#[derive(Debug, Clone)]
pub struct TargetReport {
    pub target: RpcTarget,
    pub stats: SummaryStats,
}

/// Render every per-target result block through tracing.
pub fn print_comparison(reports: &[TargetReport]) {
    if reports.is_empty() {
        return;
    }

    tracing::info!("=== Test Results ===");

    for report in reports {
        let stats = &report.stats;
        tracing::info!("");
        tracing::info!("{} ({}):", report.target.label, report.target.url);
        tracing::info!("  Total Tests:  {}", stats.total_tests);
        tracing::info!("  Successful:   {}", stats.successful_tests);
        tracing::info!("  Failed:       {}", stats.failed_tests);
        tracing::info!("  Average Time: {:.2}ms", stats.average_time);
        tracing::info!("  Min Time:     {:.2}ms", stats.min_time);
        tracing::info!("  Max Time:     {:.2}ms", stats.max_time);
        tracing::info!("  Median Time:  {:.2}ms", stats.median_time);
    }
}
