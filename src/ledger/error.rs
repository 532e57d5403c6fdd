use thiserror::Error;

/// Everything that can go wrong inside the ledger. All variants are local
/// and non-fatal: a failed operation leaves the chain untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("transaction batch is empty")]
    EmptyBatch,

    #[error("batch of {got} transactions is below the threshold of {need}")]
    BatchBelowThreshold { got: usize, need: usize },

    #[error("block index {index} out of range for chain of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("transactions per block must be at least 1, got {got}")]
    InvalidThreshold { got: usize },

    #[error("proof-of-work search exhausted nonce limit {limit}")]
    SearchExhausted { limit: u64 },
}
