use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, StatsResponse};

#[get("/stats/")]
pub async fn get_stats(state: web::Data<AppState>) -> impl Responder {
    let bc = state.blockchain.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(StatsResponse {
        height: bc.len(),
        difficulty: bc.difficulty(),
        pending_size: bc.pending().len(),
        peer_count: bc.peers().len(),
        node_id: state.node_id.clone(),
    })
}
