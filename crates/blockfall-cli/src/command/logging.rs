use std::{fs::OpenOptions, path::Path, sync::Mutex};

use anyhow::Context as _;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::prelude::*;

/// Installs a global subscriber writing plain-text records to `path`.
///
/// The terminal belongs to the game screen, so logs never go to stdout or stderr.
pub(crate) fn init(path: &Path, level: LevelFilter) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(level)
        .try_init()
        .context("failed to install the log subscriber")?;

    info!(%level, path = %path.display(), "logging initialized");
    Ok(())
}
