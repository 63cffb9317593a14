use crate::config::AppConfig;
use crate::data::CsvListingSource;
use crate::router::handle;
use astra::Server;
use tracing_subscriber::EnvFilter;

mod charts;
mod config;
mod data;
mod domain;
mod errors;
mod geo;
mod navigation;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("airbnb_dashboard=info")),
        )
        .init();

    let config = AppConfig::default();
    let source = CsvListingSource::new(config.data_path.clone());

    if !source.path().exists() {
        tracing::warn!(
            path = %source.path().display(),
            "listings file not found; data pages will fail until it exists"
        );
    }

    let addr = config.bind_addr;
    tracing::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &source) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
    }

    tracing::info!("Server shut down cleanly.");
}
