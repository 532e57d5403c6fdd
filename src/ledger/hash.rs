use sha2::{Digest, Sha256};

/// SHA-256 digest of `bytes`, hex-encoded (64 lowercase hex characters).
/// Every hash in the ledger goes through this one function.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
