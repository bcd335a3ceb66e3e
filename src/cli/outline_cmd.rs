//! `contour outline <country>` — print one outline and exit.

use crate::config::Config;
use crate::outline::OutlineService;
use anyhow::{Context, Result};

/// Run the outline command.
pub async fn run(country: &str, config: Config) -> Result<()> {
    let service = OutlineService::new(&config)?;
    let markdown = service
        .outline(country)
        .await
        .with_context(|| format!("failed to build outline for {country:?}"))?;
    print!("{markdown}");
    Ok(())
}
