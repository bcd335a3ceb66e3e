//! `contour serve` — run the HTTP outline server.

use crate::config::Config;
use crate::rest;
use anyhow::Result;
use tracing::info;

/// Run the server until ctrl-c.
pub async fn run(config: Config, verbose: bool) -> Result<()> {
    // Initialize tracing
    let directive = if verbose { "contour=debug" } else { "contour=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap()),
        )
        .init();

    info!("starting Contour v{}", env!("CARGO_PKG_VERSION"));

    tokio::select! {
        result = rest::start(&config) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("received shutdown signal");
            Ok(())
        }
    }
}
