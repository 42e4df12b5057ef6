use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{ProbeError, Result};
use crate::sampler::AsyncProbe;

/// Commitment level requested from the RPC node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Commitment::Processed => write!(f, "processed"),
            Commitment::Confirmed => write!(f, "confirmed"),
            Commitment::Finalized => write!(f, "finalized"),
        }
    }
}

/// One RPC endpoint under measurement.
#[derive(Debug, Clone)]
pub struct RpcTarget {
    pub url: String,
    pub commitment: Commitment,
    pub label: String,
}

impl RpcTarget {
    pub fn new(url: &str, commitment: Commitment, label: &str) -> Self {
        Self {
            url: url.to_string(),
            commitment,
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<serde_json::Value>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// Probe that issues a JSON-RPC 2.0 `getBalance` call for a fixed account
/// against a fixed target.
///
/// The lamport balance in the response is never inspected; the probe only
/// distinguishes a well-formed success from a failure (transport error,
/// non-2xx status, or a JSON-RPC `error` member).
pub struct BalanceProbe {
    client: reqwest::Client,
    target: RpcTarget,
    pubkey: String,
}

impl BalanceProbe {
    pub fn new(target: RpcTarget, pubkey: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            target,
            pubkey: pubkey.to_string(),
        }
    }

    /// Probe with a per-request timeout, so a hung node fails the trial
    /// instead of blocking the whole run.
    pub fn with_timeout(target: RpcTarget, pubkey: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            target,
            pubkey: pubkey.to_string(),
        })
    }
}

#[async_trait]
impl AsyncProbe for BalanceProbe {
    async fn attempt(&self) -> Result<()> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getBalance",
            "params": [self.pubkey, { "commitment": self.target.commitment }],
        });

        let response = self
            .client
            .post(&self.target.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: RpcResponse = response.json().await?;

        if let Some(error) = parsed.error {
            return Err(ProbeError::Rpc(format!(
                "{} (code {})",
                error.message, error.code
            )));
        }
        if parsed.result.is_none() {
            return Err(ProbeError::Rpc(
                "response carried neither result nor error".to_string(),
            ));
        }

        Ok(())
    }
}
