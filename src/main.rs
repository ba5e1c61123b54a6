use crate::config::Config;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::service::{DashboardService, ServiceSettings};
use crate::sheets::SheetsClient;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod service;
mod sheets;
mod templates;


fn main() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("seller_dashboard_api=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 1️⃣ Configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let addr = match config.socket_addr() {
        Ok(a) => a,
        Err(e) => {
            error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Sheets client (reads the service-account key up front)
    let client = match SheetsClient::new(config.sheet_id.clone(), &config.key_file) {
        Ok(c) => c,
        Err(e) => {
            error!("Sheets client initialization failed: {e}");
            std::process::exit(1);
        }
    };
    let svc = DashboardService::new(client, ServiceSettings::from(&config));

    // 3️⃣ Start the server
    info!(%addr, sheet_id = %config.sheet_id, "API running");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &svc) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
