use actix_web::{HttpResponse, Responder, get, post, web};
use log::debug;

use super::models::{AppState, NewTxRequest, NewTxResponse, PendingResponse};

/// Submit a new transaction into the pending pool. Requests missing a
/// field never reach this handler; the Json extractor rejects them with
/// 400 before any state is touched. Field values are accepted as opaque.
#[post("/tx/")]
pub async fn post_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTxRequest>,
) -> impl Responder {
    let req = body.into_inner();

    let mut bc = state.blockchain.lock().expect("mutex poisoned");
    let index = bc.add_transaction(req.sender, req.recipient, req.amount);
    debug!(
        "POST /tx/ - queued for block {index} (pool size {})",
        bc.pending().len()
    );

    HttpResponse::Created().json(NewTxResponse { index })
}

/// List transactions waiting to be mined.
#[get("/pending/")]
pub async fn get_pending(state: web::Data<AppState>) -> impl Responder {
    let bc = state.blockchain.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(PendingResponse {
        size: bc.pending().len(),
        transactions: bc.pending().to_vec(),
    })
}
