use log::debug;

use super::block::block_hash;
use super::error::LedgerError;

/// Search nonces from 0 upward until the block hash starts with
/// `leading_zeros` zero hex digits.
///
/// The hash is computed over the real transaction batch, so the returned
/// nonce's digest is exactly the block's final `current_hash` and a sealed
/// block satisfies the difficulty predicate by construction.
///
/// `nonce_limit` bounds the search: with `Some(n)` every nonce up to and
/// including `n` is tried before giving up with `SearchExhausted`. `None`
/// keeps searching until a valid digest is found, which is probabilistically
/// certain but not formally guaranteed to terminate.
pub fn find_nonce(
    transactions: &[String],
    previous_hash: &str,
    merkle_root: &str,
    leading_zeros: usize,
    nonce_limit: Option<u64>,
) -> Result<u64, LedgerError> {
    let prefix = "0".repeat(leading_zeros);
    let mut nonce: u64 = 0;
    loop {
        let hash = block_hash(transactions, nonce, previous_hash, merkle_root);
        if hash.starts_with(&prefix) {
            debug!("POW - nonce {nonce} seals digest {hash}");
            return Ok(nonce);
        }
        if let Some(limit) = nonce_limit {
            if nonce >= limit {
                return Err(LedgerError::SearchExhausted { limit });
            }
        }
        nonce += 1;
    }
}
