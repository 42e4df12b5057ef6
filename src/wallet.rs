use std::fs;
use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose};
use ed25519_dalek::{KEYPAIR_LENGTH, SignatureError, SigningKey};
use rand::rngs::OsRng;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Key error: {0}")]
    KeyError(#[from] SignatureError),

    #[error("Wallet file not found")]
    NotFound,

    #[error("Malformed wallet file: expected {KEYPAIR_LENGTH} bytes, got {0}")]
    MalformedKey(usize),
}

pub type Result<T> = std::result::Result<T, WalletError>;

fn wallet_path(data_dir: &Path) -> PathBuf {
    data_dir.join("wallet.json")
}

/// Generate a fresh ed25519 keypair from the OS RNG.
pub fn generate_keypair() -> SigningKey {
    SigningKey::generate(&mut OsRng)
}

/// Persists a keypair to `wallet.json` under the given data directory.
///
/// The file holds the 64-byte secret||public keypair as a JSON array of
/// byte values, so it can be reloaded with [`load_keypair`] or consumed by
/// any tool expecting that layout.
///
/// # Errors
///
/// This function will return an error if:
/// * The data directory cannot be created
/// * Writing the wallet file fails
pub fn store_keypair(keys: &SigningKey, data_dir: &Path) -> Result<()> {
    fs::create_dir_all(data_dir)?;
    let bytes = keys.to_keypair_bytes().to_vec();
    let content = serde_json::to_string(&bytes)?;
    fs::write(wallet_path(data_dir), content)?;
    Ok(())
}

/// Reloads the keypair previously stored with [`store_keypair`].
///
/// # Errors
///
/// This function will return an error if:
/// * No wallet file exists under the data directory
/// * The file does not hold exactly 64 byte values
/// * The bytes do not form a consistent secret/public keypair
pub fn load_keypair(data_dir: &Path) -> Result<SigningKey> {
    let content = match fs::read_to_string(wallet_path(data_dir)) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(WalletError::NotFound),
        Err(e) => return Err(e.into()),
    };

    let bytes: Vec<u8> = serde_json::from_str(&content)?;
    let keypair_bytes: [u8; KEYPAIR_LENGTH] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| WalletError::MalformedKey(bytes.len()))?;

    Ok(SigningKey::from_keypair_bytes(&keypair_bytes)?)
}

/// Public key rendered as lowercase hex.
pub fn public_key_hex(keys: &SigningKey) -> String {
    hex::encode(keys.verifying_key().to_bytes())
}

/// Full keypair rendered as standard base64, for export.
pub fn secret_key_base64(keys: &SigningKey) -> String {
    general_purpose::STANDARD.encode(keys.to_keypair_bytes())
}
