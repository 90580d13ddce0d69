//! Calendar link Lambda - Serves one-event .ics downloads on `/`.

use ics_link::handle;
use lambda_http::{run, service_fn, Error};
use shared::Config;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Arc::new(Config::from_env()?);
    info!(contract = ?config.contract, strict_status = config.strict_status, "Starting calendar link function");

    run(service_fn(move |event| {
        let config = Arc::clone(&config);
        async move { handle(&config, &event) }
    }))
    .await
}
