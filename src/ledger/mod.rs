pub mod block;
pub mod error;
pub mod hash;
pub mod merkle;
pub mod model;
pub mod pow;

pub use block::Block;
pub use error::LedgerError;
pub use model::Ledger;

/// Proof-of-Work difficulty: leading zero hex digits required of a block hash.
pub const LEADING_ZEROS: usize = 4;

/// Default number of transactions a batch must reach to seal a block.
pub const DEFAULT_TXS_PER_BLOCK: usize = 5;

/// Default display-only hash range seeded at startup (metadata, unenforced).
pub const DEFAULT_HASH_MIN: &str = "0000";
pub const DEFAULT_HASH_MAX: &str = "00000";
