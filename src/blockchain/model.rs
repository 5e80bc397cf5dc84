use std::collections::BTreeSet;
use std::mem;

use super::Block;
use crate::transaction::Transaction;

/// In-memory blockchain with a pending-transaction pool and peer set.
///
/// Owns all mutable ledger state; callers serialize access (the API layer
/// wraps it in a `Mutex`). The chain always holds at least the genesis
/// block and indices stay contiguous from 1.
#[derive(Debug)]
pub struct Blockchain {
    pub chain: Vec<Block>,
    pending: Vec<Transaction>,
    peers: BTreeSet<String>,
    difficulty: usize,
}

impl Blockchain {
    /// Initialize a new blockchain with a genesis block.
    pub fn new(difficulty: usize) -> Self {
        let mut bc = Self {
            chain: Vec::new(),
            pending: Vec::new(),
            peers: BTreeSet::new(),
            difficulty,
        };
        bc.chain.push(Block::genesis());
        bc
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("chain always holds at least the genesis block")
    }

    /// Queue a transaction for the next mined block and return the index
    /// of the block it will land in.
    pub fn add_transaction(&mut self, sender: String, recipient: String, amount: i64) -> u64 {
        self.pending.push(Transaction::new(sender, recipient, amount));
        self.last_block().index + 1
    }

    /// Seal a new block from the pending pool and append it to the chain.
    /// The pool is moved into the block (emptied atomically). If no
    /// `previous_hash` is supplied, the current tip is hashed.
    pub fn new_block(&mut self, proof: u64, previous_hash: Option<String>) -> &Block {
        let previous_hash = previous_hash.unwrap_or_else(|| self.last_block().hash());
        let index = self.last_block().index + 1;
        let transactions = mem::take(&mut self.pending);

        self.chain
            .push(Block::new(index, transactions, proof, previous_hash));
        self.last_block()
    }

    /// Add a peer by its `host:port`, parsed out of a URL-like address
    /// such as `http://192.168.0.5:5000`. Re-registering is a no-op.
    pub fn register_peer(&mut self, address: &str) -> Result<(), &'static str> {
        let netloc = parse_netloc(address)?;
        self.peers.insert(netloc);
        Ok(())
    }

    /// Register a batch of peer addresses all-or-nothing: every address
    /// must parse before any is inserted.
    pub fn register_peers(&mut self, addresses: &[String]) -> Result<(), &'static str> {
        let netlocs = addresses
            .iter()
            .map(|a| parse_netloc(a))
            .collect::<Result<Vec<_>, _>>()?;
        self.peers.extend(netlocs);
        Ok(())
    }

    /// Adopt a candidate chain fetched from a peer, but only if it is
    /// still strictly longer than the local one. The length is re-checked
    /// here because blocks may have landed since the caller compared; a
    /// candidate that merely ties the grown chain would silently drop the
    /// freshly mined block's transactions. Returns whether the swap
    /// happened.
    pub fn replace_chain_if_longer(&mut self, chain: Vec<Block>) -> bool {
        if chain.len() > self.chain.len() {
            self.chain = chain;
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    pub fn pending(&self) -> &[Transaction] {
        &self.pending
    }

    /// Registered peers, deduplicated, in sorted order. Sorted iteration
    /// keeps the consensus tie-break (first seen of the maximal length
    /// wins) reproducible.
    pub fn peers(&self) -> &BTreeSet<String> {
        &self.peers
    }
}

/// Parse the `host:port` netloc out of a URL-like peer address.
fn parse_netloc(address: &str) -> Result<String, &'static str> {
    let url = reqwest::Url::parse(address).map_err(|_| "invalid peer address")?;
    let host = url.host_str().ok_or("peer address has no host")?;
    Ok(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}
