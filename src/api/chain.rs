use actix_web::{HttpResponse, Responder, get, post, web};
use log::{debug, info, warn};

use super::models::{
    AppState, AppendRequest, AppendResponse, ChainResponse, RewriteRequest, RewriteResponse,
    ValidateResponse,
};
use crate::ledger::LedgerError;

/// Get the full chain.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let resp = ChainResponse {
        length: ledger.len(),
        transactions_per_block: ledger.transactions_per_block(),
        chain: ledger.all_blocks(),
    };
    HttpResponse::Ok().json(resp)
}

/// Get the most recent block, 404 when the chain is empty.
#[get("/chain/latest/")]
pub async fn latest_block(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    match ledger.most_recent_block() {
        Some(block) => HttpResponse::Ok().json(block),
        None => HttpResponse::NotFound().body("ledger is empty"),
    }
}

/// Mine and append a new block from the submitted batch.
#[post("/blocks/")]
pub async fn append_block(
    state: web::Data<AppState>,
    body: web::Json<AppendRequest>,
) -> impl Responder {
    let transactions = body.into_inner().transactions;
    debug!(
        "POST /blocks/ - batch of {} transactions",
        transactions.len()
    );

    let mut ledger = state.ledger.lock().expect("mutex poisoned");
    let index = ledger.len();
    match ledger.append_block(transactions) {
        Ok(block) => {
            let resp = AppendResponse {
                index,
                hash: block.current_hash.clone(),
                nonce: block.nonce,
                merkle_root: block.merkle_root.clone(),
            };
            info!(
                "POST /blocks/ - sealed block #{} (hash={}, nonce={})",
                resp.index, resp.hash, resp.nonce
            );
            HttpResponse::Ok().json(resp)
        }
        Err(e @ LedgerError::SearchExhausted { .. }) => {
            warn!("POST /blocks/ - {e}");
            HttpResponse::UnprocessableEntity().body(e.to_string())
        }
        Err(e) => {
            warn!("POST /blocks/ - rejected: {e}");
            HttpResponse::BadRequest().body(e.to_string())
        }
    }
}

/// Append a transaction to an existing block and rebuild it. Successors are
/// left stale on purpose; /validate/ will report the break.
#[post("/blocks/{index}/transactions/")]
pub async fn rewrite_block(
    state: web::Data<AppState>,
    path: web::Path<(usize,)>,
    body: web::Json<RewriteRequest>,
) -> impl Responder {
    let index = path.into_inner().0;
    let transaction = body.into_inner().transaction;

    let mut ledger = state.ledger.lock().expect("mutex poisoned");
    match ledger.rewrite_block_appending_transaction(index, transaction) {
        Ok(block) => {
            let resp = RewriteResponse {
                index,
                hash: block.current_hash.clone(),
                nonce: block.nonce,
                merkle_root: block.merkle_root.clone(),
            };
            info!(
                "POST /blocks/{index}/transactions/ - rewrote block (hash={})",
                resp.hash
            );
            HttpResponse::Ok().json(resp)
        }
        Err(e @ LedgerError::IndexOutOfRange { .. }) => {
            warn!("POST /blocks/{index}/transactions/ - {e}");
            HttpResponse::NotFound().body(e.to_string())
        }
        Err(e @ LedgerError::SearchExhausted { .. }) => {
            warn!("POST /blocks/{index}/transactions/ - {e}");
            HttpResponse::UnprocessableEntity().body(e.to_string())
        }
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
    }
}

/// Check previous-hash linkage across the whole chain.
#[get("/validate/")]
pub async fn validate_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let resp = ValidateResponse {
        valid: ledger.verify_chain_linkage(),
        length: ledger.len(),
    };
    HttpResponse::Ok().json(resp)
}
