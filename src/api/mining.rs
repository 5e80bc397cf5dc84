use actix_web::{HttpResponse, Responder, post, web};
use log::{info, warn};

use super::models::{AppState, MineResponse};
use crate::blockchain::{BLOCK_REWARD, REWARD_SENDER, pow};

/// Mine a new block:
/// - Solve PoW against the tip block's proof (outside the chain lock, so
///   transaction submission stays live while searching)
/// - Queue the reward transaction (sender "0", recipient = this node)
/// - Seal the block from the pending pool and append it
///
/// The reward insert and the append happen under one lock acquisition, so
/// the pool moves into the block atomically. If another append landed
/// while we were solving, the solution is stale and we mine again on the
/// new tip.
#[post("/mine/")]
pub async fn mine_block(state: web::Data<AppState>) -> impl Responder {
    loop {
        let (tip_index, last_proof, difficulty) = {
            let bc = state.blockchain.lock().expect("mutex poisoned");
            let tip = bc.last_block();
            (tip.index, tip.proof, bc.difficulty())
        };

        let proof = pow::proof_of_work(last_proof, difficulty);

        let mut bc = state.blockchain.lock().expect("mutex poisoned");
        if bc.last_block().index != tip_index {
            warn!("MINER - tip moved past #{tip_index} while solving, retrying");
            continue;
        }

        bc.add_transaction(
            REWARD_SENDER.to_string(),
            state.node_id.clone(),
            BLOCK_REWARD,
        );
        let block = bc.new_block(proof, None);
        info!(
            "MINER - sealed block #{} ({} txs, proof={})",
            block.index,
            block.transactions.len(),
            block.proof
        );

        return HttpResponse::Ok().json(MineResponse {
            index: block.index,
            transactions: block.transactions.clone(),
            proof: block.proof,
            previous_hash: block.previous_hash.clone(),
        });
    }
}
