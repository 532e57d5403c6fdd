use serde::{Deserialize, Serialize};

use super::hash::sha256_hex;

/// A sealed block: an ordered batch of transactions plus the hashes that
/// chain it to its predecessor. Blocks are only built by the ledger's
/// append and rewrite operations, never hand-assembled with stale hashes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub transactions: Vec<String>,
    pub nonce: u64,
    pub previous_hash: String,
    pub current_hash: String,
    pub merkle_root: String,
}

/// Canonical textual rendering of a transaction list: `[` + elements joined
/// by a single space + `]`. Mining and later re-verification must agree on
/// this rendering byte for byte, so it lives in exactly one place.
fn render_transactions(transactions: &[String]) -> String {
    let mut out = String::from("[");
    for (i, tx) in transactions.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(tx);
    }
    out.push(']');
    out
}

/// Hash the four block fields through one canonical preimage: the rendered
/// transaction list, the nonce in decimal, then the previous hash and the
/// Merkle root, concatenated with no delimiters.
pub fn block_hash(
    transactions: &[String],
    nonce: u64,
    previous_hash: &str,
    merkle_root: &str,
) -> String {
    let preimage = format!(
        "{}{}{}{}",
        render_transactions(transactions),
        nonce,
        previous_hash,
        merkle_root
    );
    sha256_hex(preimage.as_bytes())
}
