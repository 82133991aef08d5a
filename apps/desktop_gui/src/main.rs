use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use clock_core::{LetterGrid, PhrasingKind};
use clock_runtime::{load_settings, Settings};
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod controller;
mod ui;

use ui::{app::load_face_settings, WordClockApp};

#[derive(Parser, Debug)]
#[command(name = "wordclock", about = "Shows the time as lit words on a letter grid")]
struct Args {
    /// Settings file; defaults to ./wordclock.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    tick_interval_ms: Option<u64>,
    #[arg(long)]
    phrasing: Option<PhrasingKind>,
    /// Advance one minute per tick instead of following the wall clock.
    #[arg(long)]
    simulate: bool,
    #[arg(long)]
    debug_overlay: bool,
}

fn resolve_settings(args: &Args) -> Result<Settings> {
    let mut settings = load_settings(args.config.as_deref()).context("failed to load settings")?;

    if let Some(v) = args.tick_interval_ms {
        settings.tick_interval_ms = v;
    }
    if let Some(v) = args.phrasing {
        settings.phrasing = v;
    }
    settings.simulate |= args.simulate;
    settings.debug_overlay |= args.debug_overlay;

    settings.validate()?;
    Ok(settings)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let settings = resolve_settings(&args)?;
    info!(
        tick_interval_ms = settings.tick_interval_ms,
        phrasing = %settings.phrasing,
        simulate = settings.simulate,
        "starting word clock"
    );

    let grid = LetterGrid::standard().context("letter grid is malformed")?;
    let (events, scheduler) = backend_bridge::runtime::launch(&settings)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Word Clock")
            .with_inner_size([800.0, 760.0])
            .with_min_inner_size([320.0, 300.0]),
        ..Default::default()
    };

    let repaint_interval = settings.tick_interval();
    let debug_overlay = settings.debug_overlay;
    eframe::run_native(
        "Word Clock",
        options,
        Box::new(move |cc| {
            let persisted = cc.storage.and_then(load_face_settings);
            Ok(Box::new(WordClockApp::new(
                grid,
                events,
                scheduler,
                repaint_interval,
                debug_overlay,
                persisted,
            )))
        }),
    )
    .map_err(|err| anyhow!("word clock window failed: {err}"))
}
