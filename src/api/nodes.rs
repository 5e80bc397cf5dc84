use actix_web::{HttpResponse, Responder, get, post, web};
use log::{debug, info, warn};

use super::models::{AppState, RegisterNodesRequest, RegisterNodesResponse, ResolveResponse};
use crate::consensus;

/// Register one or more peer nodes by URL. Malformed addresses are
/// rejected; re-registering a known peer is a no-op.
#[post("/nodes/register/")]
pub async fn register_nodes(
    state: web::Data<AppState>,
    body: web::Json<RegisterNodesRequest>,
) -> impl Responder {
    if body.nodes.is_empty() {
        return HttpResponse::BadRequest().body("nodes list required");
    }

    let mut bc = state.blockchain.lock().expect("mutex poisoned");
    // All-or-nothing: one bad address rejects the batch with no mutation.
    if let Err(msg) = bc.register_peers(&body.nodes) {
        warn!("POST /nodes/register/ - rejected batch: {msg}");
        return HttpResponse::BadRequest().body(msg);
    }
    debug!(
        "POST /nodes/register/ - added {} address(es), {} peer(s) total",
        body.nodes.len(),
        bc.peers().len()
    );

    HttpResponse::Created().json(RegisterNodesResponse {
        total_peers: bc.peers().len(),
        peers: bc.peers().iter().cloned().collect(),
    })
}

/// Run the consensus algorithm: fetch every registered peer's chain and
/// adopt the longest valid one if it beats ours.
#[get("/nodes/resolve/")]
pub async fn resolve_chain(state: web::Data<AppState>) -> impl Responder {
    let (local_len, peers, difficulty) = {
        let bc = state.blockchain.lock().expect("mutex poisoned");
        (
            bc.len(),
            bc.peers().iter().cloned().collect::<Vec<_>>(),
            bc.difficulty(),
        )
    };

    // Fetches run without the chain lock; only the swap below needs it.
    let client = state.http.clone();
    let best = consensus::find_longer_chain(local_len, peers, difficulty, |peer| {
        let client = client.clone();
        async move { consensus::fetch_peer_chain(&client, &peer).await }
    })
    .await;

    let mut bc = state.blockchain.lock().expect("mutex poisoned");
    let replaced = match best {
        // The chain may have grown while we were fetching; the swap
        // re-checks length so a stale candidate cannot displace a block
        // mined in the meantime.
        Some(chain) => {
            let adopted = bc.replace_chain_if_longer(chain);
            if adopted {
                info!(
                    "CONSENSUS - replaced local chain (length {local_len} -> {})",
                    bc.len()
                );
            } else {
                warn!("CONSENSUS - candidate went stale while fetching, local chain kept");
            }
            adopted
        }
        None => {
            debug!("CONSENSUS - local chain kept (length {local_len})");
            false
        }
    };

    HttpResponse::Ok().json(ResolveResponse {
        replaced,
        length: bc.len(),
        chain: bc.chain.clone(),
    })
}
