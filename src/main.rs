use std::env;

use cluster_recommender::models::config::ServerConfig;
use cluster_recommender::processing::handle_message;
use cluster_recommender::repository;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config_path = env::var("RECOMMENDER_CONFIG").unwrap_or_else(|_| "config".to_string());
    let config = match ServerConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let table = match repository::load_from(&config.data_path) {
        Ok(table) => table,
        Err(e) => {
            log::error!("Failed to load product table: {e}");
            std::process::exit(1);
        }
    };
    if table.is_empty() {
        log::warn!("Product table {} has no products", config.data_path);
    }

    let context = zmq::Context::new();
    let responder = match context.socket(zmq::REP) {
        Ok(socket) => socket,
        Err(e) => {
            log::error!("Cannot create zmq socket: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = responder.bind(&config.zmq_address) {
        log::error!("Cannot bind to {}: {e}", config.zmq_address);
        std::process::exit(1);
    }
    log::info!("Serving lookups on {}", config.zmq_address);

    loop {
        let msg = match responder.recv_bytes(0) {
            Ok(msg) => msg,
            Err(e) => {
                log::error!("Failed to receive message: {e}");
                continue;
            }
        };

        let reply = handle_message(&msg, table, config.default_count);
        let payload = match serde_json::to_vec(&reply) {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("Failed to encode reply: {e}");
                br#"{"Error":"internal error"}"#.to_vec()
            }
        };
        if let Err(e) = responder.send(payload, 0) {
            log::error!("Failed to send reply: {e}");
        }
    }
}
