use actix_web::{HttpResponse, Responder, get, post, web};
use log::{info, warn};

use super::models::{
    AppState, ConfigResponse, SetHashRangeRequest, SetNonceLimitRequest, SetThresholdRequest,
};
use crate::ledger::LEADING_ZEROS;

#[get("/config/")]
pub async fn get_config(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let (min, max) = ledger.display_hash_range();
    HttpResponse::Ok().json(ConfigResponse {
        transactions_per_block: ledger.transactions_per_block(),
        block_hash_min: min.to_string(),
        block_hash_max: max.to_string(),
        nonce_limit: ledger.nonce_limit(),
        leading_zeros: LEADING_ZEROS,
    })
}

/// Update the batch-size threshold (affects future blocks only).
#[post("/config/threshold/")]
pub async fn set_threshold(
    state: web::Data<AppState>,
    body: web::Json<SetThresholdRequest>,
) -> impl Responder {
    let mut ledger = state.ledger.lock().expect("mutex poisoned");
    match ledger.set_transactions_per_block(body.transactions_per_block) {
        Ok(()) => {
            info!(
                "POST /config/threshold/ - transactions per block set to {}",
                body.transactions_per_block
            );
            HttpResponse::Ok().finish()
        }
        Err(e) => {
            warn!("POST /config/threshold/ - {e}");
            HttpResponse::BadRequest().body(e.to_string())
        }
    }
}

/// Store the display-only hash range. Never enforced against mining.
#[post("/config/hash-range/")]
pub async fn set_hash_range(
    state: web::Data<AppState>,
    body: web::Json<SetHashRangeRequest>,
) -> impl Responder {
    let req = body.into_inner();
    let mut ledger = state.ledger.lock().expect("mutex poisoned");
    ledger.set_display_hash_range(req.min, req.max);
    HttpResponse::Ok().finish()
}

/// Bound (or unbound) the proof-of-work search for future blocks.
#[post("/config/nonce-limit/")]
pub async fn set_nonce_limit(
    state: web::Data<AppState>,
    body: web::Json<SetNonceLimitRequest>,
) -> impl Responder {
    let mut ledger = state.ledger.lock().expect("mutex poisoned");
    ledger.set_nonce_limit(body.nonce_limit);
    info!(
        "POST /config/nonce-limit/ - nonce limit set to {:?}",
        body.nonce_limit
    );
    HttpResponse::Ok().finish()
}
