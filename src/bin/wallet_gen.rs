use std::path::PathBuf;

use clap::Parser;

use ::solprobe::{Result, init_tracing, wallet};

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Directory where wallet.json is written
    #[clap(long, value_name = "PATH", default_value = ".")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let keys = wallet::generate_keypair();
    tracing::info!("Wallet public key: {}", wallet::public_key_hex(&keys));
    tracing::info!(
        "Wallet secret (base64): {}",
        wallet::secret_key_base64(&keys)
    );

    wallet::store_keypair(&keys, &args.data_dir)?;
    tracing::info!("Wallet saved to {}", args.data_dir.join("wallet.json").display());

    let reloaded = wallet::load_keypair(&args.data_dir)?;
    tracing::info!("Reloaded public key: {}", wallet::public_key_hex(&reloaded));

    Ok(())
}
