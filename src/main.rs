use crate::app::App;
use crate::router::handle;
use crate::store::JsonStore;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};

mod app;
mod domain;
mod errors;
mod responses;
mod router;
mod spreadsheets;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load the ledger once at startup; every mutation rewrites the document.
    let data_path = std::env::var("RENTALS_DATA").unwrap_or_else(|_| "rentals.json".to_string());
    let app = match App::load(JsonStore::new(&data_path)) {
        Ok(app) => app,
        Err(e) => {
            error!("could not load ledger from {data_path}: {e}");
            std::process::exit(1);
        }
    };
    let app = Arc::new(app);

    let addr = std::env::var("RENTALS_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let addr: SocketAddr = match addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("invalid RENTALS_ADDR {addr:?}: {e}");
            std::process::exit(1);
        }
    };

    info!("ledger file: {data_path}");
    info!("listening on http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            if err != crate::errors::ServerError::NotFound {
                warn!("request failed: {err}");
            }
            responses::error_to_response(err)
        }
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }
}
