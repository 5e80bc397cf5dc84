use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF};
use crate::transaction::Transaction;

/// A single block in the chain holding a batch of transactions, the proof
/// that sealed it and the hash of its predecessor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: f64, // seconds since epoch (UTC)
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

impl Block {
    /// Create the genesis block (first block, fixed proof, sentinel hash).
    pub fn genesis() -> Self {
        Self::new(
            1,
            Vec::new(),
            GENESIS_PROOF,
            GENESIS_PREVIOUS_HASH.to_string(),
        )
    }

    pub fn new(
        index: u64,
        transactions: Vec<Transaction>,
        proof: u64,
        previous_hash: String,
    ) -> Self {
        Self {
            index,
            timestamp: Utc::now().timestamp_micros() as f64 / 1_000_000.0,
            transactions,
            proof,
            previous_hash,
        }
    }

    /// Compute the SHA-256 hash of this block over a canonical preimage.
    /// Field order is fixed; transactions are serialized as JSON in their
    /// stored order (transaction order is part of the canonical form and
    /// must not be re-sorted).
    pub fn hash(&self) -> String {
        let txs_json = serde_json::to_string(&self.transactions).expect("serialize txs");
        let preimage = format!(
            "{}:{}:{}:{}:{}",
            self.index, self.previous_hash, self.proof, self.timestamp, txs_json
        );
        let mut hasher = Sha256::new();
        hasher.update(preimage.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::Block;
    use crate::transaction::Transaction;

    fn sample_block() -> Block {
        let mut b = Block::new(
            2,
            vec![
                Transaction::new("alice".into(), "bob".into(), 5),
                Transaction::new("bob".into(), "carol".into(), 3),
            ],
            35293,
            "prev".into(),
        );
        b.timestamp = 1_600_000_000.5;
        b
    }

    #[test]
    fn genesis_shape() {
        let g = Block::genesis();
        assert_eq!(g.index, 1);
        assert_eq!(g.proof, 100);
        assert_eq!(g.previous_hash, "1");
        assert!(g.transactions.is_empty());
    }

    #[test]
    fn hash_is_deterministic() {
        let b = sample_block();
        assert_eq!(b.hash(), b.hash());
        assert_eq!(b.hash(), b.clone().hash());
    }

    #[test]
    fn hash_changes_with_any_field() {
        let base = sample_block();

        let mut b = sample_block();
        b.proof += 1;
        assert_ne!(base.hash(), b.hash());

        let mut b = sample_block();
        b.previous_hash = "other".into();
        assert_ne!(base.hash(), b.hash());

        let mut b = sample_block();
        b.timestamp += 1.0;
        assert_ne!(base.hash(), b.hash());
    }

    #[test]
    fn hash_sensitive_to_transaction_order() {
        let base = sample_block();
        let mut swapped = sample_block();
        swapped.transactions.swap(0, 1);
        assert_ne!(base.hash(), swapped.hash());
    }

    #[test]
    fn hash_is_lowercase_hex() {
        let h = sample_block().hash();
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
    }
}
