use log::{info, warn};

use super::LEADING_ZEROS;
use super::block::{Block, block_hash};
use super::error::LedgerError;
use super::merkle::merkle_root;
use super::pow::find_nonce;

/// In-memory chain of proof-of-work blocks. Append-only, except for the
/// explicit index-addressed rewrite used to demonstrate tamper-evidence.
#[derive(Debug)]
pub struct Ledger {
    blocks: Vec<Block>,
    transactions_per_block: usize,
    block_hash_min: String,
    block_hash_max: String,
    nonce_limit: Option<u64>,
}

impl Ledger {
    /// Create an empty ledger. A threshold below 1 is meaningless and is
    /// clamped; later changes go through `set_transactions_per_block`.
    pub fn new(transactions_per_block: usize) -> Self {
        Self {
            blocks: Vec::new(),
            transactions_per_block: transactions_per_block.max(1),
            block_hash_min: String::new(),
            block_hash_max: String::new(),
            nonce_limit: None,
        }
    }

    /// Return the last block in the chain, if any.
    pub fn most_recent_block(&self) -> Option<&Block> {
        self.blocks.last()
    }

    pub fn all_blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn transactions_per_block(&self) -> usize {
        self.transactions_per_block
    }

    pub fn display_hash_range(&self) -> (&str, &str) {
        (&self.block_hash_min, &self.block_hash_max)
    }

    pub fn nonce_limit(&self) -> Option<u64> {
        self.nonce_limit
    }

    /// Bound the proof-of-work search for future blocks. `None` restores the
    /// unbounded search.
    pub fn set_nonce_limit(&mut self, limit: Option<u64>) {
        self.nonce_limit = limit;
    }

    /// Mine and append a new block from `transactions`.
    ///
    /// A batch that is empty or below the configured threshold is discarded
    /// whole; batches are never accumulated across calls. On success the
    /// new block links to the previous head (empty previous hash for the
    /// first block). Atomic: any failure leaves the chain unchanged.
    pub fn append_block(&mut self, transactions: Vec<String>) -> Result<&Block, LedgerError> {
        if transactions.is_empty() {
            warn!("LEDGER - no transactions to be added to a block");
            return Err(LedgerError::EmptyBatch);
        }
        if transactions.len() < self.transactions_per_block {
            warn!(
                "LEDGER - discarding batch of {} transactions (threshold {})",
                transactions.len(),
                self.transactions_per_block
            );
            return Err(LedgerError::BatchBelowThreshold {
                got: transactions.len(),
                need: self.transactions_per_block,
            });
        }

        let previous_hash = self
            .blocks
            .last()
            .map(|b| b.current_hash.clone())
            .unwrap_or_default();
        let merkle_root = merkle_root(&transactions);
        let nonce = find_nonce(
            &transactions,
            &previous_hash,
            &merkle_root,
            LEADING_ZEROS,
            self.nonce_limit,
        )?;
        let current_hash = block_hash(&transactions, nonce, &previous_hash, &merkle_root);

        info!(
            "LEDGER - sealed block #{} (hash={}, nonce={})",
            self.blocks.len(),
            current_hash,
            nonce
        );
        self.blocks.push(Block {
            transactions,
            nonce,
            previous_hash,
            current_hash,
            merkle_root,
        });
        Ok(self.blocks.last().expect("block was just pushed"))
    }

    /// Append `new_transaction` to the block at `index` and rebuild that
    /// block: new Merkle root, previous hash re-read from the neighbor,
    /// fresh proof-of-work, fresh hash.
    ///
    /// Successor blocks keep their now-stale `previous_hash` on purpose: a
    /// rewrite is tampering, and `verify_chain_linkage` must expose it.
    pub fn rewrite_block_appending_transaction(
        &mut self,
        index: usize,
        new_transaction: String,
    ) -> Result<&Block, LedgerError> {
        if index >= self.blocks.len() {
            return Err(LedgerError::IndexOutOfRange {
                index,
                len: self.blocks.len(),
            });
        }

        let mut transactions = self.blocks[index].transactions.clone();
        transactions.push(new_transaction);

        let merkle_root = merkle_root(&transactions);
        let previous_hash = if index > 0 {
            self.blocks[index - 1].current_hash.clone()
        } else {
            String::new()
        };
        let nonce = find_nonce(
            &transactions,
            &previous_hash,
            &merkle_root,
            LEADING_ZEROS,
            self.nonce_limit,
        )?;
        let current_hash = block_hash(&transactions, nonce, &previous_hash, &merkle_root);

        warn!("LEDGER - rewrote block #{index}; successors are not relinked");
        self.blocks[index] = Block {
            transactions,
            nonce,
            previous_hash,
            current_hash,
            merkle_root,
        };
        Ok(&self.blocks[index])
    }

    /// Check the previous-hash linkage of every adjacent pair. Contents are
    /// not rehashed here, so a corrupted `current_hash` whose successor was
    /// corrupted to match would slip through. Empty and single-block chains
    /// are vacuously valid.
    pub fn verify_chain_linkage(&self) -> bool {
        self.blocks
            .windows(2)
            .all(|pair| pair[1].previous_hash == pair[0].current_hash)
    }

    /// Set the batch-size threshold for future blocks. Rejects values below
    /// 1 and keeps the prior configuration.
    pub fn set_transactions_per_block(&mut self, n: usize) -> Result<(), LedgerError> {
        if n < 1 {
            return Err(LedgerError::InvalidThreshold { got: n });
        }
        self.transactions_per_block = n;
        Ok(())
    }

    /// Display-only metadata; nothing in mining or validation reads it.
    pub fn set_display_hash_range(&mut self, min: String, max: String) {
        self.block_hash_min = min;
        self.block_hash_max = max;
    }
}

#[cfg(test)]
mod tests {
    use super::Ledger;
    use crate::ledger::LEADING_ZEROS;
    use crate::ledger::error::LedgerError;
    use crate::ledger::hash::sha256_hex;

    fn batch(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn appended_block_meets_difficulty_and_links_to_head() {
        let mut ledger = Ledger::new(2);
        ledger.append_block(batch(&["a", "b"])).expect("first append");
        let first_hash = ledger.most_recent_block().unwrap().current_hash.clone();
        assert!(first_hash.starts_with(&"0".repeat(LEADING_ZEROS)));

        ledger.append_block(batch(&["c", "d"])).expect("second append");
        let head = ledger.most_recent_block().unwrap();
        assert_eq!(head.previous_hash, first_hash);
        assert!(ledger.verify_chain_linkage());
    }

    #[test]
    fn first_block_has_empty_previous_hash() {
        let mut ledger = Ledger::new(1);
        ledger.append_block(batch(&["only"])).expect("append");
        assert_eq!(ledger.most_recent_block().unwrap().previous_hash, "");
    }

    #[test]
    fn empty_batch_is_rejected() {
        let mut ledger = Ledger::new(1);
        assert_eq!(ledger.append_block(vec![]), Err(LedgerError::EmptyBatch));
        assert!(ledger.is_empty());
    }

    #[test]
    fn under_threshold_batch_is_discarded() {
        let mut ledger = Ledger::new(3);
        let err = ledger.append_block(batch(&["a", "b"])).unwrap_err();
        assert_eq!(err, LedgerError::BatchBelowThreshold { got: 2, need: 3 });
        assert_eq!(ledger.len(), 0);

        // Batches are never accumulated: a second short batch fails the
        // same way instead of combining with the first.
        let err = ledger.append_block(batch(&["c", "d"])).unwrap_err();
        assert_eq!(err, LedgerError::BatchBelowThreshold { got: 2, need: 3 });
        assert_eq!(ledger.len(), 0);
    }

    #[test]
    fn oversized_batch_is_accepted() {
        let mut ledger = Ledger::new(2);
        ledger.append_block(batch(&["a", "b", "c"])).expect("append");
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn most_recent_block_is_none_when_empty() {
        let ledger = Ledger::new(1);
        assert!(ledger.most_recent_block().is_none());
    }

    #[test]
    fn rewrite_breaks_linkage_of_successor() {
        let mut ledger = Ledger::new(2);
        ledger.append_block(batch(&["a", "b"])).expect("append");
        ledger.append_block(batch(&["c", "d"])).expect("append");
        assert!(ledger.verify_chain_linkage());

        let block = ledger
            .rewrite_block_appending_transaction(0, "evil".to_string())
            .expect("rewrite");
        assert_eq!(block.transactions, batch(&["a", "b", "evil"]));
        assert!(block.current_hash.starts_with(&"0".repeat(LEADING_ZEROS)));

        // Block 1 still points at the old hash of block 0.
        assert!(!ledger.verify_chain_linkage());
    }

    #[test]
    fn rewrite_of_tail_block_keeps_chain_valid() {
        let mut ledger = Ledger::new(2);
        ledger.append_block(batch(&["a", "b"])).expect("append");
        ledger.append_block(batch(&["c", "d"])).expect("append");
        ledger
            .rewrite_block_appending_transaction(1, "extra".to_string())
            .expect("rewrite");
        // The tail has no successor, so the linkage check has nothing to
        // catch.
        assert!(ledger.verify_chain_linkage());
    }

    #[test]
    fn rewrite_out_of_range_changes_nothing() {
        let mut ledger = Ledger::new(1);
        ledger.append_block(batch(&["a"])).expect("append");
        let before = ledger.all_blocks().to_vec();

        let err = ledger
            .rewrite_block_appending_transaction(5, "x".to_string())
            .unwrap_err();
        assert_eq!(err, LedgerError::IndexOutOfRange { index: 5, len: 1 });
        assert_eq!(ledger.all_blocks(), &before[..]);
    }

    #[test]
    fn linkage_is_vacuously_valid_for_empty_and_single() {
        let mut ledger = Ledger::new(1);
        assert!(ledger.verify_chain_linkage());
        ledger.append_block(batch(&["a"])).expect("append");
        assert!(ledger.verify_chain_linkage());
    }

    #[test]
    fn threshold_below_one_is_rejected_without_mutation() {
        let mut ledger = Ledger::new(4);
        let err = ledger.set_transactions_per_block(0).unwrap_err();
        assert_eq!(err, LedgerError::InvalidThreshold { got: 0 });
        assert_eq!(ledger.transactions_per_block(), 4);

        ledger.set_transactions_per_block(2).expect("valid threshold");
        assert_eq!(ledger.transactions_per_block(), 2);
    }

    #[test]
    fn hash_range_is_metadata_only() {
        let mut ledger = Ledger::new(1);
        ledger.set_display_hash_range("0000".to_string(), "00000".to_string());
        assert_eq!(ledger.display_hash_range(), ("0000", "00000"));
        // Mining still succeeds regardless of the stored range.
        ledger.append_block(batch(&["a"])).expect("append");
    }

    #[test]
    fn exhausted_search_leaves_chain_unchanged() {
        let mut ledger = Ledger::new(1);
        ledger.set_nonce_limit(Some(0));
        // Nonce 0 sealing four leading zeros is effectively impossible for
        // this batch; the search gives up instead of blocking forever.
        let err = ledger.append_block(batch(&["a", "b", "c"])).unwrap_err();
        assert_eq!(err, LedgerError::SearchExhausted { limit: 0 });
        assert!(ledger.is_empty());

        ledger.set_nonce_limit(None);
        ledger.append_block(batch(&["a", "b", "c"])).expect("append");
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn end_to_end_scenario() {
        let mut ledger = Ledger::new(2);

        ledger.append_block(batch(&["a", "b"])).expect("append");
        let first = ledger.most_recent_block().unwrap().clone();
        assert_eq!(first.merkle_root, sha256_hex(b"ab"));
        assert_eq!(first.previous_hash, "");
        assert!(first.current_hash.starts_with("0000"));

        ledger.append_block(batch(&["c", "d"])).expect("append");
        let second = ledger.most_recent_block().unwrap();
        assert_eq!(second.previous_hash, first.current_hash);

        assert!(ledger.verify_chain_linkage());
    }
}
