use async_trait::async_trait;

use crate::error::Result;

/// Trait for one unit of remote work whose latency is being measured.
///
/// The sampler only observes whether `attempt` resolved or failed; any
/// success value is the implementation's own business. Timeouts, if wanted,
/// belong inside the implementation as well.
#[async_trait]
pub trait AsyncProbe: Send + Sync {
    /// Perform a single remote call.
    async fn attempt(&self) -> Result<()>;
}
