use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, ChainResponse, ValidateResponse};
use crate::blockchain::validate::is_valid_chain;

/// Get the full blockchain. This is also the feed peers consume during
/// consensus resolution.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let bc = state.blockchain.lock().expect("mutex poisoned");
    let resp = ChainResponse {
        length: bc.len(),
        chain: &bc.chain,
    };
    HttpResponse::Ok().json(resp)
}

/// Self-check the local chain: linkage and PoW.
#[get("/validate/")]
pub async fn validate_chain(state: web::Data<AppState>) -> impl Responder {
    let bc = state.blockchain.lock().expect("mutex poisoned");
    let resp = ValidateResponse {
        valid: is_valid_chain(&bc.chain, bc.difficulty()),
        length: bc.len(),
    };
    HttpResponse::Ok().json(resp)
}
