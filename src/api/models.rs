use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::Duration;
use uuid::Uuid;

use crate::blockchain::{Block, Blockchain, DEFAULT_DIFFICULTY};
use crate::transaction::Transaction;

/// Per-peer timeout for chain fetches during consensus resolution.
const PEER_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared application state: the in-memory blockchain (chain + pending
/// pool + peer set) behind a mutex, the node's one-off identity and the
/// HTTP client used to query peers.
pub struct AppState {
    pub blockchain: Mutex<Blockchain>,
    pub node_id: String,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(difficulty: usize) -> Self {
        Self {
            blockchain: Mutex::new(Blockchain::new(difficulty)),
            node_id: Uuid::new_v4().simple().to_string(),
            http: reqwest::Client::builder()
                .timeout(PEER_TIMEOUT)
                .build()
                .expect("build http client"),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_DIFFICULTY)
    }
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub length: usize,
    pub chain: &'a [Block],
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
}

/* ---------- TX API Models ---------- */

#[derive(Deserialize)]
pub struct NewTxRequest {
    pub sender: String,
    pub recipient: String,
    pub amount: i64,
}

#[derive(Serialize)]
pub struct NewTxResponse {
    /// Index of the block this transaction will land in once mined.
    pub index: u64,
}

#[derive(Serialize)]
pub struct PendingResponse {
    pub size: usize,
    pub transactions: Vec<Transaction>,
}

/* ---------- Mining API Models ---------- */

#[derive(Serialize)]
pub struct MineResponse {
    pub index: u64,
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

/* ---------- Node/Consensus API Models ---------- */

#[derive(Deserialize)]
pub struct RegisterNodesRequest {
    pub nodes: Vec<String>,
}

#[derive(Serialize)]
pub struct RegisterNodesResponse {
    pub total_peers: usize,
    pub peers: Vec<String>,
}

#[derive(Serialize)]
pub struct ResolveResponse {
    pub replaced: bool,
    pub length: usize,
    pub chain: Vec<Block>,
}

/* ---------- Stats API Models ---------- */

#[derive(Serialize)]
pub struct StatsResponse {
    pub height: usize,
    pub difficulty: usize,
    pub pending_size: usize,
    pub peer_count: usize,
    pub node_id: String,
}
