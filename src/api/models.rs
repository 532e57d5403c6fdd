use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::ledger::{Block, DEFAULT_TXS_PER_BLOCK, Ledger};

/// Shared application state wrapping the single in-memory ledger. All
/// mutating operations serialize through this one mutex.
pub struct AppState {
    pub ledger: Mutex<Ledger>,
}

impl AppState {
    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            ledger: Mutex::new(ledger),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_ledger(Ledger::new(DEFAULT_TXS_PER_BLOCK))
    }
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub length: usize,
    pub transactions_per_block: usize,
    pub chain: &'a [Block],
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
}

#[derive(Deserialize)]
pub struct AppendRequest {
    pub transactions: Vec<String>,
}

#[derive(Serialize)]
pub struct AppendResponse {
    pub index: usize,
    pub hash: String,
    pub nonce: u64,
    pub merkle_root: String,
}

#[derive(Deserialize)]
pub struct RewriteRequest {
    pub transaction: String,
}

#[derive(Serialize)]
pub struct RewriteResponse {
    pub index: usize,
    pub hash: String,
    pub nonce: u64,
    pub merkle_root: String,
}

/* ---------- Config API Models ---------- */

#[derive(Serialize)]
pub struct ConfigResponse {
    pub transactions_per_block: usize,
    pub block_hash_min: String,
    pub block_hash_max: String,
    pub nonce_limit: Option<u64>,
    pub leading_zeros: usize,
}

#[derive(Deserialize)]
pub struct SetThresholdRequest {
    pub transactions_per_block: usize,
}

#[derive(Deserialize)]
pub struct SetHashRangeRequest {
    pub min: String,
    pub max: String,
}

#[derive(Deserialize)]
pub struct SetNonceLimitRequest {
    pub nonce_limit: Option<u64>,
}
