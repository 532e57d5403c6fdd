mod api;
mod ledger;

use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use std::env;

use api::AppState;
use ledger::{DEFAULT_HASH_MAX, DEFAULT_HASH_MIN, DEFAULT_TXS_PER_BLOCK, Ledger};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080);

    let txs_per_block: usize = env::var("LEDGER_TXS_PER_BLOCK")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TXS_PER_BLOCK);
    let nonce_limit: Option<u64> = env::var("LEDGER_NONCE_LIMIT")
        .ok()
        .and_then(|v| v.parse().ok());

    let mut ledger = Ledger::new(txs_per_block);
    ledger.set_display_hash_range(DEFAULT_HASH_MIN.to_string(), DEFAULT_HASH_MAX.to_string());
    ledger.set_nonce_limit(nonce_limit);

    println!("⛓️ Starting ledger API at http://{host}:{port}");

    let state = web::Data::new(AppState::with_ledger(ledger));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
