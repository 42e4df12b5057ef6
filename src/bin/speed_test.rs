use clap::Parser;

use ::solprobe::orchestrator::{DEFAULT_TRIAL_COUNT, SpeedTest};
use ::solprobe::*;

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Account whose balance is probed on every trial
    #[clap(long, value_name = "PUBKEY")]
    pubkey: Option<String>,

    /// Number of sequential trials per target
    #[clap(long, default_value_t = DEFAULT_TRIAL_COUNT)]
    trials: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut test = SpeedTest::default();
    if let Some(pubkey) = args.pubkey {
        test.pubkey = pubkey;
    }
    test.trial_count = args.trials;

    if let Err(err) = test.run().await {
        tracing::error!("Speed test failed: {}", err);
        std::process::exit(1);
    }

    Ok(())
}
