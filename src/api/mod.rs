mod chain;
mod config;
mod health;
pub mod models;

use actix_web::web::{self, ServiceConfig};

pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(health::health_check)
            .service(chain::get_chain)
            .service(chain::latest_block)
            .service(chain::validate_chain)
            .service(chain::append_block)
            .service(chain::rewrite_block)
            .service(config::get_config)
            .service(config::set_threshold)
            .service(config::set_hash_range)
            .service(config::set_nonce_limit),
    );
}
