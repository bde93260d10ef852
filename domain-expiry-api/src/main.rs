//! HTTP endpoint binary for domain expiry lookups.
//!
//! Binds on `0.0.0.0:$PORT` (default 8080) and serves the router from
//! [`routes`]. Lookup configuration comes from the `DE_*` environment
//! variables, log filtering from `RUST_LOG`.

use domain_expiry_lib::{load_env_config, ExpiryChecker};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_env_config();
    tracing::info!(
        timeout = ?config.source_timeout,
        system_whois = config.enable_system_whois,
        "Starting domain-expiry endpoint"
    );

    let checker = Arc::new(ExpiryChecker::with_config(config)?);
    let app = routes::router(checker);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "Listening");

    axum::serve(listener, app).await?;
    Ok(())
}
