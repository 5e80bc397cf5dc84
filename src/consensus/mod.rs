//! Longest-valid-chain consensus against registered peers.

use std::future::Future;

use log::{debug, warn};
use serde::Deserialize;

use crate::blockchain::Block;
use crate::blockchain::validate::is_valid_chain;

/// Shape of a peer's `/api/v1/chain/` response.
#[derive(Deserialize)]
struct PeerChain {
    length: usize,
    chain: Vec<Block>,
}

/// Fetch `(length, chain)` from a peer's chain endpoint. Unreachable peers
/// and malformed responses yield `None`; the caller skips them.
pub async fn fetch_peer_chain(
    client: &reqwest::Client,
    peer: &str,
) -> Option<(usize, Vec<Block>)> {
    let url = format!("http://{peer}/api/v1/chain/");
    let response = match client.get(&url).send().await {
        Ok(r) => r,
        Err(e) => {
            debug!("peer {peer} unreachable: {e}");
            return None;
        }
    };
    if !response.status().is_success() {
        debug!("peer {peer} answered {}", response.status());
        return None;
    }
    match response.json::<PeerChain>().await {
        Ok(body) => Some((body.length, body.chain)),
        Err(e) => {
            warn!("peer {peer} returned a malformed chain: {e}");
            None
        }
    }
}

/// Scan `peers` for a chain strictly longer than the local one and valid
/// under `is_valid_chain`. `fetch` is the injected peer collaborator so
/// the algorithm runs without a real network in tests.
///
/// The running best is only displaced by a *strictly* longer valid chain,
/// so among equally long candidates the first one seen wins, and a chain
/// merely tying the local length never triggers replacement. Returns the
/// chain to adopt, or `None` to keep the local one.
pub async fn find_longer_chain<F, Fut>(
    local_len: usize,
    peers: impl IntoIterator<Item = String>,
    difficulty: usize,
    fetch: F,
) -> Option<Vec<Block>>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Option<(usize, Vec<Block>)>>,
{
    let mut best_len = local_len;
    let mut best_chain: Option<Vec<Block>> = None;

    for peer in peers {
        let Some((length, chain)) = fetch(peer.clone()).await else {
            debug!("skipping peer {peer}: no candidate chain");
            continue;
        };
        if length > best_len && is_valid_chain(&chain, difficulty) {
            debug!("peer {peer} offers a longer valid chain (length {length})");
            best_len = length;
            best_chain = Some(chain);
        }
    }

    best_chain
}
