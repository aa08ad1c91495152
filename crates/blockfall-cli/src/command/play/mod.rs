use std::time::Duration;

use anyhow::{Context as _, ensure};
use blockfall_engine::{Game, PieceSeed};
use tracing::info;

use crate::tui::Tui;

use self::app::PlayApp;

mod app;
mod keymap;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Fixed piece seed as 32 hex characters (random when omitted)
    #[clap(long)]
    seed: Option<PieceSeed>,
    /// Milliseconds between gravity steps
    #[clap(long, default_value_t = 500)]
    gravity_ms: u64,
    /// Maximum number of redraws per second
    #[clap(long, default_value_t = 60.0)]
    frame_rate: f64,
}

impl PlayArg {
    fn gravity(&self) -> anyhow::Result<Duration> {
        ensure!(self.gravity_ms > 0, "--gravity-ms must be positive");
        Ok(Duration::from_millis(self.gravity_ms))
    }

    /// Minimum time between two redraws.
    fn frame_interval(&self) -> anyhow::Result<Duration> {
        ensure!(
            self.frame_rate.is_finite() && self.frame_rate > 0.0,
            "--frame-rate must be a positive number"
        );
        Duration::try_from_secs_f64(1.0 / self.frame_rate)
            .with_context(|| format!("--frame-rate {} is too low", self.frame_rate))
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let gravity = arg.gravity()?;
    let frame_interval = arg.frame_interval()?;
    let game = match arg.seed {
        Some(seed) => {
            info!(%seed, "using fixed piece seed");
            Game::with_seed(seed)
        }
        None => Game::new(),
    };

    let mut app = PlayApp::new(game, gravity, frame_interval);
    Tui::new().run(&mut app)?;

    info!(score = app.game().score(), "exiting");
    Ok(())
}
