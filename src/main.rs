use anyhow::Context;
use overture::{Config, app_core::Overture, logging};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Could not read configuration")?;
    let log_path = logging::init(&config.log_level)?;

    tracing::info!(log = %log_path.display(), track = %config.track.display(), "starting overture");

    Overture::new(config)?.run()?;
    Ok(())
}
