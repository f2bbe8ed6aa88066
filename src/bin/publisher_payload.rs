use anyhow::Context;
use relution_publisher::{bootstrap, ListBox, PublisherConfig};
use std::{env, path::PathBuf};
use tracing::{info, instrument};

const ENV_CONFIG_PATH: &str = "RELUTION_CONFIG";

/// Prints the upload payload for the configured job, or the release status
/// options with `options`.
fn main() -> anyhow::Result<()> {
    bootstrap::init();

    let output = match env::args().nth(1).as_deref() {
        Some("options") => serde_json::to_string_pretty(&ListBox::release_statuses())?,
        Some("payload") | None => payload()?,
        Some(other) => anyhow::bail!("Unknown command {other:?}, expected `payload` or `options`"),
    };

    println!("{output}");
    Ok(())
}

#[instrument]
fn payload() -> anyhow::Result<String> {
    let path = env::var_os(ENV_CONFIG_PATH).map(PathBuf::from);
    if let Some(path) = &path {
        info!(path = %path.display(), "load config from file");
    }
    let config = PublisherConfig::load(path.as_deref()).context("Fail to load publisher config")?;

    let payload = config
        .build_payload()
        .context("Invalid publisher configuration")?;
    info!(
        status = payload.release_status().key(),
        constraints = payload.constraints().len(),
        "payload ready"
    );

    Ok(payload.to_json_string_pretty()?)
}
